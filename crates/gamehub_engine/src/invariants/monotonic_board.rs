//! Monotonic board invariant: stones are never removed or overwritten.

use super::{Invariant, Transition};
use crate::ruleset::Ruleset;

/// Invariant: exactly one empty cell became occupied and nothing else changed.
pub struct MonotonicBoardInvariant;

impl<'a, R: Ruleset> Invariant<Transition<'a, R>> for MonotonicBoardInvariant {
    const DESCRIPTION: &'static str =
        "Board is monotonic (one empty cell filled, nothing overwritten)";

    fn holds(transition: &Transition<'a, R>) -> bool {
        match transition.changed_cells().as_slice() {
            [index] => {
                transition.before.get(*index) == Some(None)
                    && matches!(transition.after.get(*index), Some(Some(_)))
            }
            _ => false,
        }
    }
}
