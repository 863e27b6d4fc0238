//! Punto rules.
//!
//! - `engine`: move validation and application (`RulesEngine`)
//! - `win`: five-in-a-row detection (`check_winner`)

pub mod engine;
pub mod win;

pub use engine::{ApplyOutcome, MoveError, MoveKind, RulesEngine, Validation};
pub use win::{check_winner, WinningLine, WIN_LENGTH};
