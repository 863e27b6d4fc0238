//! Match runner.
//!
//! Plays one game between two move sources:
//! - the starting side is drawn from the game RNG
//! - a side with an empty hand passes; the match stops when neither side
//!   holds cards
//! - a missing or invalid proposal falls back to the first enumerated
//!   candidate, and a side with no candidate passes
//! - the first five-in-a-line ends the match, otherwise `max_turns` applied
//!   moves or card exhaustion hands the result to `resolve_tiebreak`

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agent::{MoveSource, PlayerView};
use crate::analysis::legal_moves;
use crate::board::Board;
use crate::core::{GameState, MatchConfig, Move, Player, PlayerMap};
use crate::rules::RulesEngine;

/// How a match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    FiveInLine,
    #[serde(rename = "tiebreak_total_card_value")]
    TiebreakTotalValue,
    TiebreakPieceCount,
    TiebreakStartingPlayer,
}

impl EndReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::FiveInLine => "five_in_line",
            EndReason::TiebreakTotalValue => "tiebreak_total_card_value",
            EndReason::TiebreakPieceCount => "tiebreak_piece_count",
            EndReason::TiebreakStartingPlayer => "tiebreak_starting_player",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one match.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    pub winner: Player,
    pub reason: EndReason,
    /// Moves applied.
    pub turns: u32,
    pub start: Player,
    pub final_state: GameState,
}

/// Decide a match that ended without five in a line.
///
/// Higher total card value on the board wins, then more cards on the
/// board, then the starting side.
#[must_use]
pub fn resolve_tiebreak(board: &Board, start: Player) -> (Player, EndReason) {
    let mut total: PlayerMap<u32> = PlayerMap::with_value(0);
    let mut count: PlayerMap<u32> = PlayerMap::with_value(0);
    for (_, placed) in board.occupied() {
        total[placed.owner] += u32::from(placed.value);
        count[placed.owner] += 1;
    }

    let (one, two) = (Player::One, Player::Two);
    if total[one] != total[two] {
        let winner = if total[one] > total[two] { one } else { two };
        return (winner, EndReason::TiebreakTotalValue);
    }
    if count[one] != count[two] {
        let winner = if count[one] > count[two] { one } else { two };
        return (winner, EndReason::TiebreakPieceCount);
    }
    (start, EndReason::TiebreakStartingPlayer)
}

/// Play one match to completion.
pub fn run_match(one: &mut dyn MoveSource, two: &mut dyn MoveSource, config: &MatchConfig) -> MatchOutcome {
    let engine = RulesEngine::new(config.rules);
    let mut state = GameState::new(config.seed);
    let start = state.rng.choose(&Player::ALL).copied().unwrap_or(Player::One);
    info!(seed = config.seed, %start, one = one.name(), two = two.name(), "match started");

    let mut current = start;
    let mut turns = 0;
    let mut passes = 0;

    while turns < config.max_turns && !state.is_game_over() {
        if state.hand_size(current) == 0 {
            current = current.other();
            if state.hand_size(current) == 0 {
                break;
            }
            continue;
        }

        let source: &mut dyn MoveSource = match current {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };

        let Some(mv) = next_move(&engine, &state, current, source) else {
            debug!(player = %current, "no legal move, passing");
            passes += 1;
            if passes >= Player::ALL.len() {
                break;
            }
            current = current.other();
            continue;
        };

        if let Err(err) = engine.apply_move_guarded(&mut state, &mv, current) {
            warn!(player = %current, %mv, %err, "validated move was rejected");
            break;
        }
        passes = 0;
        turns += 1;

        if let Some(winner) = state.winner() {
            info!(%winner, turns, reason = %EndReason::FiveInLine, "match finished");
            return MatchOutcome {
                winner,
                reason: EndReason::FiveInLine,
                turns,
                start,
                final_state: state,
            };
        }
        current = current.other();
    }

    let (winner, reason) = resolve_tiebreak(state.board(), start);
    info!(%winner, turns, %reason, "match finished");
    MatchOutcome {
        winner,
        reason,
        turns,
        start,
        final_state: state,
    }
}

/// Ask the source, falling back to the first enumerated candidate.
fn next_move(engine: &RulesEngine, state: &GameState, player: Player, source: &mut dyn MoveSource) -> Option<Move> {
    match source.propose(&PlayerView::new(state, player)) {
        Some(mv) => match engine.validate(state, &mv, player) {
            Ok(_) => return Some(mv),
            Err(err) => warn!(source = source.name(), %player, %mv, %err, "invalid proposal, falling back"),
        },
        None => warn!(source = source.name(), %player, "no proposal, falling back"),
    }
    legal_moves(state, player).first().map(|candidate| candidate.mv)
}
