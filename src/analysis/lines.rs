//! Same-color run detection.
//!
//! `analyze_lines` walks every occupied cell in each of the four line
//! directions and extends forward while the color holds. A run is found
//! once from each of its cells, so runs are de-duplicated per color by
//! cell set: a run whose cells are a subset of an already recorded run is
//! dropped, and a new run evicts every recorded run it contains. What
//! remains per color is a list of maximal runs, none contained in another.
//!
//! Each run reports the cell just before its first card and just after its
//! last one. These extension points are what tactical summaries and prompt
//! builders use to tell whether a run can still grow.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Coord, Direction, BOARD_SIZE};
use crate::cards::{Card, Color};

/// Shortest run worth reporting.
pub const MIN_RUN_LENGTH: usize = 2;

/// The cell at one end of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extension {
    Empty(Coord),
    Occupied { at: Coord, value: u8, color: Color },
}

impl Extension {
    fn probe(board: &Board, at: Coord) -> Self {
        match board.get(at) {
            None => Extension::Empty(at),
            Some(placed) => Extension::Occupied {
                at,
                value: placed.value,
                color: placed.color,
            },
        }
    }

    #[must_use]
    pub fn at(&self) -> Coord {
        match *self {
            Extension::Empty(at) | Extension::Occupied { at, .. } => at,
        }
    }

    /// Whether `card` could be played here.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        match *self {
            Extension::Empty(_) => true,
            Extension::Occupied { value, .. } => card.value > value,
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extension::Empty(at) => write!(f, "{at} empty"),
            Extension::Occupied { at, value, color } => {
                write!(f, "{at} holds {}{value}", color.symbol())
            }
        }
    }
}

/// A maximal run of same-colored cards along one direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRun {
    pub color: Color,
    pub length: usize,
    /// Cells in walk order.
    pub cells: SmallVec<[Coord; BOARD_SIZE]>,
    pub direction: Direction,
    /// Cell before the first card; `None` at the board edge.
    pub before: Option<Extension>,
    /// Cell after the last card; `None` at the board edge.
    pub after: Option<Extension>,
}

impl LineRun {
    /// Bit set of the run's cells.
    #[must_use]
    pub fn mask(&self) -> u64 {
        self.cells.iter().fold(0, |mask, c| mask | c.bit())
    }

    /// Both ends, skipping board edges.
    pub fn extensions(&self) -> impl Iterator<Item = &Extension> {
        self.before.iter().chain(self.after.iter())
    }

    /// True if `card` could be played on either end.
    #[must_use]
    pub fn can_extend_with(&self, card: Card) -> bool {
        self.extensions().any(|ext| ext.accepts(card))
    }

    /// True if either end is an empty cell.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.extensions().any(|ext| matches!(ext, Extension::Empty(_)))
    }
}

impl std::fmt::Display for LineRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} x{}", self.color, self.direction, self.length)?;
        if let (Some(first), Some(last)) = (self.cells.first(), self.cells.last()) {
            write!(f, " {first}-{last}")?;
        }
        Ok(())
    }
}

/// Runs found on a board, grouped by color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    runs: [Vec<LineRun>; 4],
}

impl LineReport {
    #[must_use]
    pub fn for_color(&self, color: Color) -> &[LineRun] {
        &self.runs[color.index()]
    }

    /// Colors in `Color::ALL` order with their runs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[LineRun])> {
        Color::ALL.into_iter().map(move |c| (c, self.for_color(c)))
    }

    /// Longest run of a color, first found on ties.
    #[must_use]
    pub fn longest(&self, color: Color) -> Option<&LineRun> {
        self.for_color(color)
            .iter()
            .reduce(|best, run| if run.length > best.length { run } else { best })
    }

    #[must_use]
    pub fn total_runs(&self) -> usize {
        self.runs.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_runs() == 0
    }

    fn record(&mut self, run: LineRun) {
        let recorded = &mut self.runs[run.color.index()];
        let mask = run.mask();

        if recorded.iter().any(|r| r.mask() & mask == mask) {
            return;
        }
        recorded.retain(|r| {
            let existing = r.mask();
            existing & mask != existing
        });
        recorded.push(run);
    }
}

/// Walk forward from `start` while the color holds.
fn walk(board: &Board, start: Coord, direction: Direction) -> Option<LineRun> {
    let color = board.color_at(start)?;
    let (dx, dy) = direction.delta();

    let mut cells: SmallVec<[Coord; BOARD_SIZE]> = SmallVec::new();
    let mut cursor = Some(start);
    while let Some(at) = cursor {
        if board.color_at(at) != Some(color) {
            break;
        }
        cells.push(at);
        cursor = at.offset(dx, dy, 1);
    }

    if cells.len() < MIN_RUN_LENGTH {
        return None;
    }

    let last = *cells.last()?;
    Some(LineRun {
        color,
        length: cells.len(),
        before: start.offset(-dx, -dy, 1).map(|at| Extension::probe(board, at)),
        after: last.offset(dx, dy, 1).map(|at| Extension::probe(board, at)),
        direction,
        cells,
    })
}

/// Find every maximal same-color run of at least two cards.
#[must_use]
pub fn analyze_lines(board: &Board) -> LineReport {
    let mut report = LineReport::default();
    for direction in Direction::ALL {
        for (start, _) in board.occupied() {
            if let Some(run) = walk(board, start, direction) {
                report.record(run);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlacedCard;

    fn put(board: &mut Board, x: i32, y: i32, value: u8, color: Color) {
        let card = Card::new(value, color).unwrap();
        board.set(Coord::new(x, y).unwrap(), Some(PlacedCard::new(color.owner(), card)));
    }

    fn at(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn test_empty_and_single_cards() {
        assert!(analyze_lines(&Board::new()).is_empty());

        let mut board = Board::new();
        put(&mut board, 2, 2, 5, Color::Red);
        put(&mut board, 4, 4, 5, Color::Red);
        assert!(analyze_lines(&board).is_empty());
    }

    #[test]
    fn test_run_found_once() {
        let mut board = Board::new();
        for x in 1..4 {
            put(&mut board, x, 2, 3, Color::Green);
        }

        let report = analyze_lines(&board);
        let runs = report.for_color(Color::Green);
        assert_eq!(runs.len(), 1);

        let run = &runs[0];
        assert_eq!(run.length, 3);
        assert_eq!(run.direction, Direction::Horizontal);
        assert_eq!(run.cells.as_slice(), &[at(1, 2), at(2, 2), at(3, 2)]);
        assert_eq!(run.before, Some(Extension::Empty(at(0, 2))));
        assert_eq!(run.after, Some(Extension::Empty(at(4, 2))));
        assert!(report.for_color(Color::Red).is_empty());
    }

    #[test]
    fn test_extensions_at_edge_and_occupied() {
        let mut board = Board::new();
        put(&mut board, 0, 0, 1, Color::Blue);
        put(&mut board, 0, 1, 1, Color::Blue);
        put(&mut board, 0, 2, 6, Color::Yellow);

        let report = analyze_lines(&board);
        let run = &report.for_color(Color::Blue)[0];
        assert_eq!(run.direction, Direction::Vertical);
        assert_eq!(run.before, None);
        assert_eq!(
            run.after,
            Some(Extension::Occupied {
                at: at(0, 2),
                value: 6,
                color: Color::Yellow
            })
        );

        assert!(!run.is_open());
        assert!(!run.can_extend_with(Card::new(6, Color::Blue).unwrap()));
        assert!(run.can_extend_with(Card::new(7, Color::Blue).unwrap()));
    }

    #[test]
    fn test_crossing_runs_are_both_kept() {
        let mut board = Board::new();
        for i in 0..3 {
            put(&mut board, i + 1, 2, 2, Color::Red);
            put(&mut board, 2, i + 1, 2, Color::Red);
        }

        let report = analyze_lines(&board);
        let directions: Vec<_> = report
            .for_color(Color::Red)
            .iter()
            .filter(|r| r.length == 3)
            .map(|r| r.direction)
            .collect();
        assert_eq!(directions, vec![Direction::Horizontal, Direction::Vertical]);
        // The arms also touch diagonally
        assert_eq!(report.for_color(Color::Red).len(), 6);
    }

    #[test]
    fn test_diagonal_down_left() {
        let mut board = Board::new();
        put(&mut board, 4, 1, 2, Color::Yellow);
        put(&mut board, 3, 2, 2, Color::Yellow);

        let report = analyze_lines(&board);
        let run = &report.for_color(Color::Yellow)[0];
        assert_eq!(run.direction, Direction::DiagonalDownLeft);
        assert_eq!(run.cells.as_slice(), &[at(4, 1), at(3, 2)]);
        assert_eq!(run.before, Some(Extension::Empty(at(5, 0))));
        assert_eq!(run.after, Some(Extension::Empty(at(2, 3))));
    }

    #[test]
    fn test_no_run_contains_another() {
        let mut board = Board::new();
        for x in 0..6 {
            put(&mut board, x, 0, 4, Color::Green);
        }
        for y in 1..4 {
            put(&mut board, 0, y, 4, Color::Green);
        }

        let report = analyze_lines(&board);
        let runs = report.for_color(Color::Green);
        for (i, a) in runs.iter().enumerate() {
            for (j, b) in runs.iter().enumerate() {
                if i != j {
                    assert_ne!(a.mask() & b.mask(), a.mask());
                }
            }
        }
        assert_eq!(report.longest(Color::Green).unwrap().length, 6);
    }

    #[test]
    fn test_record_evicts_contained_runs() {
        let mut board = Board::new();
        for x in 0..4 {
            put(&mut board, x, 0, 1, Color::Red);
        }
        let short = walk(&board, at(2, 0), Direction::Horizontal).unwrap();
        let long = walk(&board, at(0, 0), Direction::Horizontal).unwrap();

        let mut report = LineReport::default();
        report.record(short.clone());
        report.record(long.clone());
        assert_eq!(report.for_color(Color::Red), &[long.clone()]);

        report.record(short);
        assert_eq!(report.for_color(Color::Red), &[long]);
    }
}
