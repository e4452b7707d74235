//! Last-move invariant: the recorded index is the cell just filled.

use super::{Invariant, Transition};
use crate::ruleset::Ruleset;

/// Invariant: `last_move` points at a cell that was empty before the move
/// and now holds the mover's mark.
pub struct LastMoveRecordedInvariant;

impl<'a, R: Ruleset> Invariant<Transition<'a, R>> for LastMoveRecordedInvariant {
    const DESCRIPTION: &'static str = "Last move records the cell just filled";

    fn holds(transition: &Transition<'a, R>) -> bool {
        let Some(index) = transition.after.last_move() else {
            return false;
        };
        transition.before.get(index) == Some(None)
            && transition.after.get(index) == Some(Some(transition.before.to_move()))
    }
}
