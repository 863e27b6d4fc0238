//! Move representation.
//!
//! A move is a card plus a target cell. Who plays it travels alongside
//! (every engine call takes the acting `Player`), so the same `Move` value
//! can be proposed by any move source and checked against either player.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, PlacedCard};
use crate::cards::Card;

use super::player::Player;

/// A card to play and where to play it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub at: Coord,
    pub card: Card,
}

impl Move {
    #[must_use]
    pub fn new(at: Coord, card: Card) -> Self {
        Self { at, card }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.card, self.at)
    }
}

/// An applied move, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn counter before the move (0-based).
    pub turn: u32,

    /// Who played it.
    pub player: Player,

    /// The move itself.
    pub mv: Move,

    /// The card that was overwritten, if this was a capture.
    pub captured: Option<PlacedCard>,
}
