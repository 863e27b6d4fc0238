//! Core engine types: players, RNG, configuration, moves and game state.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{HeuristicWeights, MatchConfig, PlacementRule, RulesConfig};
pub use action::{Move, MoveRecord};
pub use state::{GameState, SnapshotError};
