//! The 6x6 grid, coordinates and line directions.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::Player;

/// Board width and height.
pub const BOARD_SIZE: usize = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell position. `x` is the column, `y` the row, both in `0..6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Build a coordinate, rejecting anything off the board.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// The cell `steps` cells away along `(dx, dy)`, if still on the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Option<Self> {
        Self::new(i32::from(self.x) + dx * steps, i32::from(self.y) + dy * steps)
    }

    /// Row-major index (`y * 6 + x`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    /// Single-bit mask for this cell, used for run set arithmetic.
    #[must_use]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Every cell in row-major order (y outer, x inner).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Coord { x, y }))
    }

    /// The up to eight cells surrounding this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.offset(dx, dy, 1))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four line orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Forward step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (-1, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDownRight => "diagonal down-right",
            Direction::DiagonalDownLeft => "diagonal down-left",
        };
        f.write_str(name)
    }
}

/// A card sitting on the board.
///
/// `owner` is recorded for display and capture scoring; line membership
/// only ever looks at `color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub owner: Player,
    pub value: u8,
    pub color: Color,
}

impl PlacedCard {
    /// Place a card for a player.
    #[must_use]
    pub fn new(owner: Player, card: Card) -> Self {
        Self {
            owner,
            value: card.value,
            color: card.color,
        }
    }

    /// The card face without ownership.
    #[must_use]
    pub fn card(self) -> Card {
        Card {
            value: self.value,
            color: self.color,
        }
    }
}

/// The 6x6 playing grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    // Row-major: cells[y][x]
    cells: [[Option<PlacedCard>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<PlacedCard> {
        self.cells[at.y as usize][at.x as usize]
    }

    /// Write a cell, overwriting any captured card.
    #[inline]
    pub fn set(&mut self, at: Coord, placed: Option<PlacedCard>) {
        self.cells[at.y as usize][at.x as usize] = placed;
    }

    /// Color at a cell, if occupied.
    #[inline]
    #[must_use]
    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.get(at).map(|p| p.color)
    }

    /// True when no card has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// True if any of the eight surrounding cells holds a card.
    #[must_use]
    pub fn has_neighbor(&self, at: Coord) -> bool {
        at.neighbors().any(|n| self.get(n).is_some())
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PlacedCard)> + '_ {
        Coord::all().filter_map(move |c| self.get(c).map(|p| (c, p)))
    }
}

impl std::fmt::Display for Board {
    /// Text grid: column header, one row per line, `..` for empty cells
    /// and `R7` style symbols for cards.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {:>2}", x)?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                match self.cells[y][x] {
                    Some(p) => write!(f, " {}", p.card())?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
