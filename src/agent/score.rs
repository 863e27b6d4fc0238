//! Handcrafted move scoring.
//!
//! `score = center + capture + line + economy`, see `HeuristicWeights` for
//! the terms. Scores are evaluated against the board before the move; the
//! candidate cell itself is never counted as part of a neighbouring run.

use crate::analysis::CandidateMove;
use crate::board::{Board, Coord, Direction, BOARD_SIZE};
use crate::cards::Color;
use crate::core::{HeuristicWeights, Player};

/// Board center on both axes.
const CENTER: f64 = (BOARD_SIZE as f64 - 1.0) / 2.0;

/// Count consecutive `color` cells from `at` stepping by `(dx, dy)`,
/// not counting `at` itself.
#[must_use]
pub fn line_length(board: &Board, at: Coord, color: Color, dx: i32, dy: i32) -> usize {
    let mut count = 0;
    let mut cursor = at.offset(dx, dy, 1);
    while let Some(cell) = cursor {
        if board.color_at(cell) != Some(color) {
            break;
        }
        count += 1;
        cursor = cell.offset(dx, dy, 1);
    }
    count
}

/// Length of the run `color` would form through `at` along `direction`.
#[must_use]
pub fn run_through(board: &Board, at: Coord, color: Color, direction: Direction) -> usize {
    let (dx, dy) = direction.delta();
    line_length(board, at, color, dx, dy) + line_length(board, at, color, -dx, -dy) + 1
}

fn center_bonus(at: Coord, weights: &HeuristicWeights) -> f64 {
    let distance = (f64::from(at.x) - CENTER).abs() + (f64::from(at.y) - CENTER).abs();
    weights.center_base - weights.center_slope * distance
}

fn capture_bonus(board: &Board, player: Player, candidate: &CandidateMove, weights: &HeuristicWeights) -> f64 {
    match board.get(candidate.at()) {
        Some(cell) if cell.owner != player => weights.capture_opponent,
        Some(cell) if cell.color != candidate.mv.card.color => weights.capture_own_other_color,
        _ => 0.0,
    }
}

/// Score a candidate for `player`. Higher is better.
#[must_use]
pub fn score_move(board: &Board, player: Player, candidate: &CandidateMove, weights: &HeuristicWeights) -> f64 {
    let at = candidate.at();
    let card = candidate.mv.card;

    let mut best_line = 0;
    let mut line_score = 0.0;
    for direction in Direction::ALL {
        let total = run_through(board, at, card.color, direction);
        best_line = best_line.max(total);
        line_score += match total {
            t if t >= 4 => weights.line_four,
            3 => weights.line_three,
            2 => weights.line_two,
            _ => 0.0,
        };
    }

    let economy = if best_line < weights.weak_line_threshold && card.value >= weights.high_card_threshold {
        weights.high_card_penalty
    } else {
        0.0
    };

    center_bonus(at, weights) + capture_bonus(board, player, candidate, weights) + line_score + economy
}
