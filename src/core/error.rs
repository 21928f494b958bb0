//! Error taxonomy.
//!
//! Every rejection the engine can produce is an ordinary value here; nothing
//! is fatal to the host process. `OutOfBounds` indicates a caller bug (the UI
//! should clamp clicks to the rendered grid); the rest are user-recoverable
//! rejections the UI surfaces before allowing a retry.

use thiserror::Error;

use super::config::GamePhase;
use super::coord::Coord;
use super::player::PlayerId;

/// Why a placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementViolation {
    #[error("the cell is already occupied")]
    CellOccupied,
    #[error("no placement pairs remaining")]
    NoPairsRemaining,
    #[error("placing here would form a line")]
    WouldFormLine,
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveViolation {
    #[error("no stone is selected")]
    NothingSelected,
    #[error("the destination is occupied")]
    DestinationOccupied,
    #[error("the destination is not adjacent")]
    NotAdjacent,
}

/// A rejected action.
///
/// Rejections never mutate the board or the stone counts. The one documented
/// exception: a rejected move consumes the pending selection (spelled out on
/// [`GameSession::move_selected`](crate::session::GameSession::move_selected)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Coordinate outside the grid. The action is a no-op.
    #[error("coordinate {at} is outside the {rows}x{cols} board")]
    OutOfBounds { at: Coord, rows: usize, cols: usize },

    /// Placement rejected; the user may retry.
    #[error("cannot place at {at}: {reason}")]
    InvalidPlacement { at: Coord, reason: PlacementViolation },

    /// Move rejected; the pending selection is cleared and the user may retry.
    #[error("cannot move to {to}: {reason}")]
    InvalidMove { to: Coord, reason: MoveViolation },

    /// Action attempted in the wrong phase.
    #[error("action requires the {expected} phase but the game is in {actual}")]
    PhaseMismatch {
        expected: GamePhase,
        actual: GamePhase,
    },

    /// The session is terminal; reset or discard it.
    #[error("the game is over, {winner} has won")]
    SessionOver { winner: PlayerId },
}
