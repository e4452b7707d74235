//! Errors raised by move application.

/// Error that can occur when validating or applying a move.
///
/// An invalid move is a caller bug: [`crate::BoardState::is_valid_move`]
/// is always available as a cheap pre-check.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a cell on this board.
    #[display("Index {} is out of bounds (board has {} cells)", index, size)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board.
        size: usize,
    },

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
