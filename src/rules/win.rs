//! Five-in-a-row detection.
//!
//! The scan visits colors in `Color::ALL` order and, per color, the four
//! directions in a fixed order, stopping at the first complete line. When a
//! single move completes lines of two colors only the first one found is
//! reported.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Direction, BOARD_SIZE};
use crate::cards::Color;
use crate::core::Player;

/// Cards of one color needed in a line to win.
pub const WIN_LENGTH: usize = 5;

/// A completed line of five same-colored cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub color: Color,
    pub direction: Direction,
    pub cells: [Coord; WIN_LENGTH],
}

impl WinningLine {
    /// The player owning the line's color.
    #[must_use]
    pub fn player(&self) -> Player {
        self.color.owner()
    }
}

/// Start cells for a direction, in scan order.
fn line_starts(direction: Direction) -> Vec<Coord> {
    let span = (BOARD_SIZE - WIN_LENGTH + 1) as u8;
    let size = BOARD_SIZE as u8;
    let mut starts = Vec::new();
    match direction {
        Direction::Horizontal => {
            for y in 0..size {
                for x in 0..span {
                    starts.push(Coord { x, y });
                }
            }
        }
        Direction::Vertical => {
            for x in 0..size {
                for y in 0..span {
                    starts.push(Coord { x, y });
                }
            }
        }
        Direction::DiagonalDownRight => {
            for x in 0..span {
                for y in 0..span {
                    starts.push(Coord { x, y });
                }
            }
        }
        Direction::DiagonalDownLeft => {
            for x in (size - span)..size {
                for y in 0..span {
                    starts.push(Coord { x, y });
                }
            }
        }
    }
    starts
}

/// The five cells from `start` along `direction` if all hold `color`.
fn full_line(board: &Board, start: Coord, direction: Direction, color: Color) -> Option<[Coord; WIN_LENGTH]> {
    let (dx, dy) = direction.delta();
    let mut cells = [start; WIN_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        let at = start.offset(dx, dy, i as i32)?;
        if board.color_at(at) != Some(color) {
            return None;
        }
        *cell = at;
    }
    Some(cells)
}

/// Find the first complete five-card line on the board.
#[must_use]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for color in Color::ALL {
        for direction in Direction::ALL {
            for start in line_starts(direction) {
                if let Some(cells) = full_line(board, start, direction, color) {
                    return Some(WinningLine {
                        color,
                        direction,
                        cells,
                    });
                }
            }
        }
    }
    None
}
