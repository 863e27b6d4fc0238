//! # punto
//!
//! Rule engine, position analysis and heuristic agent for Punto: a 6x6
//! board where two players place numbered, colored cards, capture any cell
//! holding a strictly lower value, and win with five same-colored cards in
//! a line.
//!
//! ## Design Principles
//!
//! 1. **One Mutation Path**: `GameState` only changes through
//!    `RulesEngine::apply_move`. Analysis and agents read it or work on
//!    clones.
//!
//! 2. **Explicit Rule Tiers**: the engine accepts any empty cell by default;
//!    the move enumerator, and the engine under `PlacementRule::Adjacent`,
//!    require a neighbouring card once the board is non-empty.
//!
//! 3. **Deterministic**: decks are shuffled from a seeded `GameRng`, win
//!    detection scans in a fixed order and agents break ties by
//!    enumeration order.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, moves and game state
//! - `cards`: colors, cards, decks and hands
//! - `board`: coordinates, directions and the grid
//! - `rules`: move validation/application and win detection
//! - `analysis`: line runs, candidate moves, tactical hints
//! - `agent`: `MoveSource` trait and the heuristic agent
//! - `arena`: match runner, tie-break and session storage
//!
//! ## Example
//!
//! ```
//! use punto::{choose_heuristic_move, GameState, Player, RulesEngine};
//!
//! let mut state = GameState::new(42);
//! let engine = RulesEngine::default();
//!
//! let decision = choose_heuristic_move(&state, Player::One).unwrap();
//! engine.apply(&mut state, &decision.mv, Player::One).unwrap();
//!
//! assert_eq!(state.turn(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod analysis;
pub mod agent;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng, GameRngState,
    HeuristicWeights, MatchConfig, PlacementRule, RulesConfig,
    Move, MoveRecord,
    GameState, SnapshotError,
};

pub use crate::cards::{Card, Color, Deck, Hand};

pub use crate::board::{Board, Coord, Direction, PlacedCard};

pub use crate::rules::{check_winner, ApplyOutcome, MoveError, MoveKind, RulesEngine, Validation, WinningLine};

pub use crate::analysis::{
    analyze_lines, enumerate_moves, legal_moves,
    CandidateKind, CandidateMove, CaptureTarget,
    Extension, LineReport, LineRun,
    Tactic, TacticalSummary,
};

pub use crate::agent::{
    choose_heuristic_move, score_move,
    AgentError, Decision, DecisionReason, HeuristicAgent,
    MoveSource, PlayerView, ScriptedSource,
};

pub use crate::arena::{run_match, EndReason, InMemorySessionStore, MatchOutcome, SessionStore};
