//! The playing surface.
//!
//! A fixed 6x6 grid of optional placed cards, the coordinate type used
//! throughout the crate, and the four line directions that win detection
//! and line analysis walk along.

pub mod grid;

pub use grid::{Board, Coord, Direction, PlacedCard, BOARD_SIZE, CELL_COUNT};
