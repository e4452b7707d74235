//! Contract-based validation for move application.
//!
//! A move is checked against its precondition before the board is touched,
//! and the resulting transition against [`MoveInvariants`] afterwards.

use crate::board::BoardState;
use crate::error::MoveError;
use crate::invariants::{InvariantSet, MoveInvariants, Transition};
use crate::ruleset::Ruleset;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the index addresses a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects indices past the last cell.
    pub fn check<R: Ruleset>(index: usize) -> Result<(), MoveError> {
        if index < R::SIZE {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                index,
                size: R::SIZE,
            })
        }
    }
}

/// Precondition: the addressed cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check<R: Ruleset>(state: &BoardState<R>, index: usize) -> Result<(), MoveError> {
        match state.get(index) {
            Some(None) => Ok(()),
            _ => Err(MoveError::Occupied(index)),
        }
    }
}

/// Composite precondition: in bounds and empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state), fields(ruleset = R::NAME))]
    pub fn check<R: Ruleset>(state: &BoardState<R>, index: usize) -> Result<(), MoveError> {
        InBounds::check::<R>(index)?;
        CellIsEmpty::check(state, index)?;
        Ok(())
    }
}

/// Contract for placing a stone.
pub struct MoveContract;

impl<R: Ruleset> Contract<BoardState<R>, usize> for MoveContract {
    fn pre(state: &BoardState<R>, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(state, *index)
    }

    fn post(before: &BoardState<R>, after: &BoardState<R>) -> Result<(), MoveError> {
        MoveInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations.join("; ");
            warn!(ruleset = R::NAME, %descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
