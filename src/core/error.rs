//! Engine error types.
//!
//! Only two things can go wrong: asking for a board that is too small (or
//! absurdly large), and playing a move that is not legal on the given board.
//! Both are reported as values; the engine never silently ignores a move.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::CellKind;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// The coordinate lies outside the grid.
    OutOfRange,
    /// The coordinate addresses a dot or a box-centre.
    NotALine(CellKind),
    /// The line slot is already filled.
    AlreadyFilled,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "coordinate is off the board"),
            IllegalMoveReason::NotALine(kind) => write!(f, "cell is a {kind}, not a line slot"),
            IllegalMoveReason::AlreadyFilled => write!(f, "line is already drawn"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board construction with fewer than 2 (or more than `MAX_DOTS`) dots on an axis.
    #[error("invalid board dimensions {width}x{height}: each side needs 2..=1024 dots")]
    InvalidDimension {
        /// Requested width in dots.
        width: usize,
        /// Requested height in dots.
        height: usize,
    },

    /// The move cannot be played on this board.
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        /// Grid row of the attempted move.
        row: usize,
        /// Grid column of the attempted move.
        col: usize,
        /// What made it illegal.
        reason: IllegalMoveReason,
    },
}

impl EngineError {
    /// Check whether this is an `IllegalMove` error.
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, EngineError::IllegalMove { .. })
    }
}
