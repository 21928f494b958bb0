//! # bolotudu
//!
//! Rule engine for Bolotudu, a two-player abstract strategy game on a fixed
//! grid: a placement phase (stones added in pairs, never completing a line)
//! followed by a movement phase (stones slide to adjacent cells; newly
//! formed lines capture one adjacent opponent stone).
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The engine exposes state-transition operations
//!    and structured outcomes. Rendering, persistence and accounts are
//!    external collaborators that consume those outcomes; no UI or timing
//!    state lives here.
//!
//! 2. **Configuration over constants**: Board dimensions, allotments, line
//!    length and the loss threshold are `GameConfig` parameters, never
//!    hard-coded.
//!
//! 3. **Rejections are values**: Every illegal action is an ordinary
//!    `RuleError`; nothing panics, and rejected actions never mutate state
//!    (except the documented selection-clearing on a rejected move).
//!
//! ## Modules
//!
//! - `core`: player IDs, coordinates, configuration, errors
//! - `board`: grid storage with bounds-checked access
//! - `rules`: pure legality/line/capture queries over a board
//! - `session`: the turn/phase state machine driving a game
//!
//! ## Example
//!
//! ```
//! use bolotudu::{Coord, GameConfig, GameSession, Outcome};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let outcome = session.place(Coord::new(0, 0)).unwrap();
//! assert!(matches!(outcome, Outcome::Placed { .. }));
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, GameConfig, GamePhase, MoveViolation, PlacementViolation, PlayerId, PlayerPair,
    RuleError,
};

pub use crate::board::{Board, Cell};

pub use crate::rules::{
    adjacent_opponent_stones, is_adjacent_move, legal_moves, legal_placements, line_through,
    no_three_in_line, Axis, Line,
};

pub use crate::session::{GameSession, Intent, Outcome};
