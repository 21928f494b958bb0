//! Board storage: a fixed-dimension grid of cells.
//!
//! The board is pure storage with bounds-checked access. It performs no
//! legality checks of its own — placement and movement legality belong to
//! the [`rules`](crate::rules) layer, and sequencing to the
//! [`session`](crate::session) layer.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PlayerId, RuleError};

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(PlayerId),
}

impl Cell {
    /// True if the cell holds no stone.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The stone's owner, if any.
    #[must_use]
    pub fn stone(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }
}

/// A fixed-dimension grid of cells.
///
/// Dimensions never change after construction. Cells are addressed by
/// 0-based [`Coord`]s within `[0, rows) x [0, cols)`; `get` and `set` fail
/// with [`RuleError::OutOfBounds`] outside that range and mutate nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Board must have at least one row");
        assert!(cols > 0, "Board must have at least one column");

        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Board height in cells.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width in cells.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the coordinate addresses a cell on this board.
    #[must_use]
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    fn idx(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    fn bounds_check(&self, at: Coord) -> Result<(), RuleError> {
        if self.in_bounds(at) {
            Ok(())
        } else {
            Err(RuleError::OutOfBounds {
                at,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the cell at a coordinate.
    pub fn get(&self, at: Coord) -> Result<Cell, RuleError> {
        self.bounds_check(at)?;
        Ok(self.cells[self.idx(at)])
    }

    /// Set the cell at a coordinate.
    ///
    /// No side effects beyond the single cell mutated; legality is the
    /// caller's responsibility.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), RuleError> {
        self.bounds_check(at)?;
        let idx = self.idx(at);
        self.cells[idx] = cell;
        Ok(())
    }

    /// The stone's owner at a coordinate, or `None` if the cell is empty or
    /// the coordinate is off the board.
    ///
    /// The off-board case folds into `None` so directional scans can probe
    /// neighbors without a separate bounds check.
    #[must_use]
    pub fn occupant(&self, at: Coord) -> Option<PlayerId> {
        if self.in_bounds(at) {
            self.cells[self.idx(at)].stone()
        } else {
            None
        }
    }

    /// True if the coordinate is on the board and the cell is empty.
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.in_bounds(at) && self.cells[self.idx(at)].is_empty()
    }

    /// Count the stones a player has on the board.
    #[must_use]
    pub fn stone_count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|c| c.stone() == Some(player))
            .count()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &cell)| {
            (Coord::new(i / self.cols, i % self.cols), cell)
        })
    }
}

impl std::fmt::Display for Board {
    /// ASCII rendering: `.` for empty, `1`/`2` for stones, one row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.cells[row * self.cols + col] {
                    Cell::Empty => '.',
                    Cell::Stone(p) => char::from(b'1' + p.index() as u8),
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
