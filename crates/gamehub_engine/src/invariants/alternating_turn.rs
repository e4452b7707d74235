//! Alternating turn invariant: the mover places its own mark and passes.

use super::{Invariant, Transition};
use crate::ruleset::Ruleset;

/// Invariant: the placed stone belongs to the side that was to move, and
/// the turn passes to its opponent.
pub struct AlternatingTurnInvariant;

impl<'a, R: Ruleset> Invariant<Transition<'a, R>> for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns";

    fn holds(transition: &Transition<'a, R>) -> bool {
        let mover = transition.before.to_move();
        if transition.after.to_move() != mover.opponent() {
            return false;
        }
        transition
            .changed_cells()
            .iter()
            .all(|&index| transition.after.get(index) == Some(Some(mover)))
    }
}
