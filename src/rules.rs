//! Pure rule queries over a board.
//!
//! Everything here is a read-only function of a [`Board`] plus its arguments;
//! nothing mutates. The [`session`](crate::session) layer sequences these
//! checks into state transitions.
//!
//! Only rows and columns are ever scanned — diagonal runs are not lines in
//! this rule set.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, PlayerId};

/// A scan direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes, in the order rules evaluate them.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A contiguous same-player run along one axis.
///
/// `start` is the left (horizontal) or top (vertical) end of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    pub start: Coord,
    pub end: Coord,
}

impl Line {
    /// Number of stones in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.axis {
            Axis::Horizontal => self.end.col - self.start.col + 1,
            Axis::Vertical => self.end.row - self.start.row + 1,
        }
    }

    /// The cells of the run, start end first.
    #[must_use]
    pub fn cells(&self) -> SmallVec<[Coord; 6]> {
        match self.axis {
            Axis::Horizontal => (self.start.col..=self.end.col)
                .map(|col| Coord::new(self.start.row, col))
                .collect(),
            Axis::Vertical => (self.start.row..=self.end.row)
                .map(|row| Coord::new(row, self.start.col))
                .collect(),
        }
    }
}

/// The in-bounds neighbor of `from` one step along `axis`, or `None` at the
/// board edge. `dir` is -1 (left/up) or +1 (right/down).
fn step(board: &Board, from: Coord, axis: Axis, dir: i32) -> Option<Coord> {
    let (row, col) = match axis {
        Axis::Horizontal => (from.row as i64, from.col as i64 + dir as i64),
        Axis::Vertical => (from.row as i64 + dir as i64, from.col as i64),
    };
    if row < 0 || col < 0 {
        return None;
    }
    let next = Coord::new(row as usize, col as usize);
    board.in_bounds(next).then_some(next)
}

/// Count contiguous `player` stones strictly beyond `from` in one direction.
fn run_beyond(board: &Board, from: Coord, axis: Axis, dir: i32, player: PlayerId) -> usize {
    let mut count = 0;
    let mut cur = from;
    while let Some(next) = step(board, cur, axis, dir) {
        if board.occupant(next) != Some(player) {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Endpoints of the contiguous `player` run through `at` along `axis`.
///
/// `at` itself is always part of the run, so this is meaningful even when the
/// cell is only hypothetically occupied.
fn run_extent(board: &Board, at: Coord, axis: Axis, player: PlayerId) -> (Coord, Coord) {
    let mut start = at;
    while let Some(prev) = step(board, start, axis, -1) {
        if board.occupant(prev) != Some(player) {
            break;
        }
        start = prev;
    }
    let mut end = at;
    while let Some(next) = step(board, end, axis, 1) {
        if board.occupant(next) != Some(player) {
            break;
        }
        end = next;
    }
    (start, end)
}

/// Would placing `player`'s stone at `at` avoid forming a run of `min_run`
/// or more in both the horizontal and the vertical direction?
///
/// The placement is hypothetical: the board is never touched. The run length
/// on each axis is one (the new stone) plus the contiguous same-player runs
/// on either side of `at`.
#[must_use]
pub fn no_three_in_line(board: &Board, at: Coord, player: PlayerId, min_run: usize) -> bool {
    Axis::ALL.iter().all(|&axis| {
        let run = 1
            + run_beyond(board, at, axis, -1, player)
            + run_beyond(board, at, axis, 1, player);
        run < min_run
    })
}

/// The line through the stone at `at`, if one exists.
///
/// Scans the horizontal axis first, then the vertical; returns the first
/// axis whose contiguous run reaches `min_run`, with the full span. Returns
/// `None` if the cell is empty or neither axis reaches `min_run`.
#[must_use]
pub fn line_through(board: &Board, at: Coord, min_run: usize) -> Option<Line> {
    let player = board.occupant(at)?;
    for axis in Axis::ALL {
        let (start, end) = run_extent(board, at, axis, player);
        let line = Line { axis, start, end };
        if line.len() >= min_run {
            return Some(line);
        }
    }
    None
}

/// Opponent stones immediately beyond the endpoints of the run through `at`
/// along `axis`.
///
/// The start-side neighbor (left of a horizontal run, above a vertical run)
/// comes first. Returns zero, one, or two coordinates; empty when the cell
/// at `at` is empty.
#[must_use]
pub fn adjacent_opponent_stones(board: &Board, at: Coord, axis: Axis) -> SmallVec<[Coord; 2]> {
    let mut out = SmallVec::new();
    let Some(player) = board.occupant(at) else {
        return out;
    };
    let opponent = player.opponent();
    let (start, end) = run_extent(board, at, axis, player);

    if let Some(before) = step(board, start, axis, -1) {
        if board.occupant(before) == Some(opponent) {
            out.push(before);
        }
    }
    if let Some(after) = step(board, end, axis, 1) {
        if board.occupant(after) == Some(opponent) {
            out.push(after);
        }
    }
    out
}

/// True iff `to` is an empty cell exactly one step from `from` along a row
/// or column. Diagonal moves are never legal.
#[must_use]
pub fn is_adjacent_move(board: &Board, from: Coord, to: Coord) -> bool {
    if !board.is_empty(to) {
        return false;
    }
    let row_diff = from.row.abs_diff(to.row);
    let col_diff = from.col.abs_diff(to.col);
    (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
}

/// All cells where `player` could legally place a stone: empty and not
/// completing a run of `min_run`.
#[must_use]
pub fn legal_placements(board: &Board, player: PlayerId, min_run: usize) -> Vec<Coord> {
    board
        .iter()
        .filter(|&(at, cell)| cell.is_empty() && no_three_in_line(board, at, player, min_run))
        .map(|(at, _)| at)
        .collect()
}

/// All legal (from, to) slides for `player`'s stones.
#[must_use]
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<(Coord, Coord)> {
    let mut moves = Vec::new();
    for (from, cell) in board.iter() {
        if cell.stone() != Some(player) {
            continue;
        }
        for axis in Axis::ALL {
            for dir in [-1, 1] {
                if let Some(to) = step(board, from, axis, dir) {
                    if board.is_empty(to) {
                        moves.push((from, to));
                    }
                }
            }
        }
    }
    moves
}
