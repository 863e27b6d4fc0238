//! Read-only position analysis.
//!
//! ## Components
//!
//! - `lines`: maximal same-color runs with their extension points
//! - `moves`: candidate moves for a hand, with the adjacency filter
//! - `tactics`: short text hints built from the line report
//!
//! Nothing here mutates a `GameState`. The heuristic agent and prompt
//! builders consume these against a snapshot of the live game.

pub mod lines;
pub mod moves;
pub mod tactics;

pub use lines::{analyze_lines, Extension, LineReport, LineRun, MIN_RUN_LENGTH};
pub use moves::{enumerate_moves, legal_moves, CandidateKind, CandidateMove, CaptureTarget};
pub use tactics::{Tactic, TacticalSummary};
