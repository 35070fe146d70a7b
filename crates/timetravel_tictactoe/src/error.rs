//! Error types for moves and history navigation.

use super::Position;

/// An index outside the range the game can address.
///
/// The presentation layer only ever offers valid indices, so this points at
/// an integration bug and is surfaced instead of corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IndexError {
    /// Step outside `[0, len)` of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    Step {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Cell outside `[0, 9)`.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    Cell(usize),
}

impl std::error::Error for IndexError {}

/// Why a move on a valid cell was refused.
///
/// The reducer treats these as no-ops; they exist for logging and for
/// callers that want to know why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The current board already has a winning line.
    #[display("Game is already decided")]
    GameDecided,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for IllegalMove {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move breaks the game rules.
    #[display("Illegal move: {}", _0)]
    Illegal(IllegalMove),

    /// The cell index does not exist.
    #[display("{}", _0)]
    Index(IndexError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<IllegalMove> for MoveError {
    fn from(err: IllegalMove) -> Self {
        MoveError::Illegal(err)
    }
}

impl From<IndexError> for MoveError {
    fn from(err: IndexError) -> Self {
        MoveError::Index(err)
    }
}
