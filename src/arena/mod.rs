//! Match orchestration.
//!
//! - `runner`: plays a match between two move sources and applies the
//!   tie-break when nobody completes a line
//! - `session`: keyed storage with TTL eviction for games in progress

pub mod runner;
pub mod session;

pub use runner::{resolve_tiebreak, run_match, EndReason, MatchOutcome};
pub use session::{InMemorySessionStore, SessionStore};
