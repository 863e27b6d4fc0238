//! Candidate move enumeration.
//!
//! Stricter than the rules engine: once a card is on the board, an empty
//! cell is only a candidate if it touches an occupied cell (8-neighborhood).
//! Captures need a strictly higher value, as in the engine.
//!
//! Candidates are produced with the hand sorted by descending value, then
//! row-major over the board. Agents break score ties by this order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Coord, PlacedCard};
use crate::cards::{Card, Hand};
use crate::core::{GameState, Move, Player};

/// Whose card a capture overwrites, relative to the played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureTarget {
    Own,
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    Placement,
    Capture {
        captured: PlacedCard,
        target: CaptureTarget,
    },
}

/// A legal move with what it does to its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    pub mv: Move,
    pub kind: CandidateKind,
}

impl CandidateMove {
    #[must_use]
    pub fn at(&self) -> Coord {
        self.mv.at
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, CandidateKind::Capture { .. })
    }
}

impl std::fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CandidateKind::Placement => write!(f, "{}", self.mv),
            CandidateKind::Capture { captured, target } => {
                let whose = match target {
                    CaptureTarget::Own => "own",
                    CaptureTarget::Opponent => "opponent",
                };
                write!(f, "{} capturing {whose} {}", self.mv, captured.card())
            }
        }
    }
}

/// List every candidate move for `hand` on `board`.
///
/// With `is_first_move` set, or on an empty board, every empty cell is a
/// candidate.
#[must_use]
pub fn enumerate_moves(board: &Board, hand: &Hand, is_first_move: bool) -> Vec<CandidateMove> {
    let anywhere = is_first_move || board.is_empty();

    let mut cards: SmallVec<[Card; 2]> = SmallVec::from_slice(hand.as_slice());
    cards.sort_by(|a, b| b.value.cmp(&a.value));

    let mut moves = Vec::new();
    for card in cards {
        for at in Coord::all() {
            let kind = match board.get(at) {
                None if anywhere || board.has_neighbor(at) => CandidateKind::Placement,
                None => continue,
                Some(occupied) if card.value > occupied.value => CandidateKind::Capture {
                    captured: occupied,
                    target: if occupied.owner == card.owner() {
                        CaptureTarget::Own
                    } else {
                        CaptureTarget::Opponent
                    },
                },
                Some(_) => continue,
            };
            moves.push(CandidateMove {
                mv: Move::new(at, card),
                kind,
            });
        }
    }
    moves
}

/// Candidates for `player` in the current game.
#[must_use]
pub fn legal_moves(state: &GameState, player: Player) -> Vec<CandidateMove> {
    let board = state.board();
    enumerate_moves(board, &state.hands[player], board.is_empty())
}
