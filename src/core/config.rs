//! Game configuration types.
//!
//! Every rule parameter is configurable at session creation; the engine never
//! hard-codes board dimensions or stone counts. `GameConfig::default()` is
//! the standard Bolotudu setup: a 6x5 board, two stones per placement turn,
//! six pairs per player, lines of three, elimination at two stones.

use serde::{Deserialize, Serialize};

/// The phase of a game.
///
/// Transitions once, `Placement` to `Movement`, when both players have
/// exhausted their placement allotment. Never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Stones are being added to the board in pairs.
    Placement,
    /// Stones slide to adjacent empty cells; lines capture.
    Movement,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Placement => write!(f, "placement"),
            GamePhase::Movement => write!(f, "movement"),
        }
    }
}

/// Complete rule configuration for a session.
///
/// Construct with [`GameConfig::default`] for the standard game, or with
/// `new` plus the `with_*` builder methods for variants:
///
/// ```
/// use bolotudu::GameConfig;
///
/// let config = GameConfig::new(6, 5).with_pairs_per_player(3);
/// assert_eq!(config.stones_per_player(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board height in cells.
    pub rows: usize,

    /// Board width in cells.
    pub cols: usize,

    /// Stones a player places before their placement turn ends (a "pair").
    pub stones_per_turn: u32,

    /// Placement allotment per player, counted in pairs.
    pub pairs_per_player: u32,

    /// A player loses the moment their on-board stone count drops to this
    /// value or below.
    pub loss_threshold: u32,

    /// Minimum contiguous run of same-player stones that counts as a line.
    pub line_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 5,
            stones_per_turn: 2,
            pairs_per_player: 6,
            loss_threshold: 2,
            line_length: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `rows` x `cols` board with standard
    /// Bolotudu rule parameters.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Board must have at least one row");
        assert!(cols > 0, "Board must have at least one column");

        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the number of stones placed per placement turn.
    #[must_use]
    pub fn with_stones_per_turn(mut self, stones: u32) -> Self {
        assert!(stones > 0, "Must place at least one stone per turn");
        self.stones_per_turn = stones;
        self
    }

    /// Set the placement allotment per player, in pairs.
    #[must_use]
    pub fn with_pairs_per_player(mut self, pairs: u32) -> Self {
        assert!(pairs > 0, "Must have at least one pair per player");
        self.pairs_per_player = pairs;
        self
    }

    /// Set the stone count at or below which a player loses.
    #[must_use]
    pub fn with_loss_threshold(mut self, threshold: u32) -> Self {
        self.loss_threshold = threshold;
        self
    }

    /// Set the minimum run length that counts as a line.
    #[must_use]
    pub fn with_line_length(mut self, length: usize) -> Self {
        assert!(length >= 2, "A line must span at least two cells");
        self.line_length = length;
        self
    }

    /// Total stones each player places over the whole game.
    #[must_use]
    pub fn stones_per_player(&self) -> u32 {
        self.pairs_per_player * self.stones_per_turn
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
