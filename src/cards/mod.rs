//! Card model: colored, numbered cards plus per-player decks and hands.
//!
//! ## Components
//!
//! - `Card`: immutable `{value, color}` pair, value in 1-9
//! - `Color`: one of four colors, each permanently owned by one player
//! - `Deck`: a player's 18-card draw pile
//! - `Hand`: the (usually two) cards a player can currently play

pub mod card;
pub mod deck;

pub use card::{Card, Color, MAX_VALUE, MIN_VALUE};
pub use deck::{Deck, Hand, DECK_SIZE, HAND_SIZE};
