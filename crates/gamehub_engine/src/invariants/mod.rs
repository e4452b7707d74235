//! Properties every move transition must preserve.
//!
//! Invariants are checked over a [`Transition`] (the state before a move and
//! the state after it) so they can be tested independently of move
//! application.

mod alternating_turn;
mod last_move;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use last_move::LastMoveRecordedInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::board::BoardState;
use crate::ruleset::Ruleset;

/// A property a state (here, a move transition) must satisfy.
pub trait Invariant<S> {
    /// What the property asserts, reported when it fails.
    const DESCRIPTION: &'static str;

    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;
}

/// Invariants checked together; implemented for tuples of up to three.
pub trait InvariantSet<S> {
    /// Descriptions of every member that `state` breaks, in tuple order.
    fn violations(state: &S) -> Vec<&'static str>;

    /// `Ok` when nothing is broken, otherwise every violation.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let violations = Self::violations(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn violations(state: &S) -> Vec<&'static str> {
                [$((
                    <$member as Invariant<S>>::holds(state),
                    <$member as Invariant<S>>::DESCRIPTION,
                )),+]
                .into_iter()
                .filter_map(|(holds, description)| (!holds).then_some(description))
                .collect()
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// A single move: the state before it and the state it produced.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a, R: Ruleset> {
    /// State the move was applied to.
    pub before: &'a BoardState<R>,
    /// State the move produced.
    pub after: &'a BoardState<R>,
}

impl<'a, R: Ruleset> Transition<'a, R> {
    /// Pairs two states.
    pub fn new(before: &'a BoardState<R>, after: &'a BoardState<R>) -> Self {
        Self { before, after }
    }

    /// Indices whose cell differs between the two states.
    pub fn changed_cells(&self) -> Vec<usize> {
        self.before
            .cells()
            .iter()
            .zip(self.after.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
            .collect()
    }
}

/// All invariants checked after every move.
pub type MoveInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    LastMoveRecordedInvariant,
);
