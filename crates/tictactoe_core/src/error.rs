//! Error and rejection types.

use crate::{Outcome, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Caller passed something that is not a move at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside the board (valid range is 0-8).
    #[display("Cell index {} is out of bounds (must be 0-8)", index)]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },
}

/// Why a well-formed move was refused.
///
/// Rejections are ordinary data: the caller re-prompts the player and
/// keeps using the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", position)]
    AlreadyOccupied {
        /// The occupied cell.
        position: Position,
    },
    /// The game has already ended.
    #[display("Game is already over ({})", outcome)]
    GameAlreadyOver {
        /// The terminal outcome.
        outcome: Outcome,
    },
}

/// What stopped a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReplayErrorKind {
    /// The index was out of bounds.
    #[display("{}", _0)]
    Invalid(#[error(source)] MoveError),
    /// The move was refused.
    #[display("{}", _0)]
    Rejected(#[error(source)] Rejection),
}

/// A replay stopped before consuming every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} failed: {}", move_number, kind)]
pub struct ReplayError {
    /// 0-based number of the failing move.
    pub move_number: usize,
    /// Cause.
    #[error(source)]
    pub kind: ReplayErrorKind,
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", found)]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// The text did not describe exactly 9 cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongLength {
        /// Number of cells seen.
        found: usize,
    },
}
