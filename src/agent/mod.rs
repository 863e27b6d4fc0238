//! Move selection.
//!
//! ## Components
//!
//! - `source`: the `MoveSource` trait, `PlayerView` and a scripted source
//! - `score`: the handcrafted scoring function
//! - `heuristic`: `HeuristicAgent` (win, block, best score)

pub mod heuristic;
pub mod score;
pub mod source;

pub use heuristic::{choose_heuristic_move, threat_cells, AgentError, Decision, DecisionReason, HeuristicAgent};
pub use score::{line_length, run_through, score_move};
pub use source::{MoveSource, PlayerView, ScriptedSource};
