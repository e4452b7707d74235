//! Move search.
//!
//! - [`exhaustive_minimax`]: full-depth minimax for boards small enough to
//!   solve outright.
//! - [`alpha_beta`]: depth-limited alpha-beta over the ruleset's candidate
//!   moves, scored by [`crate::eval::evaluate_board`] at the horizon.
//!
//! Both searches place and retract stones on one scratch buffer instead of
//! cloning a board per node, and both break ties in favour of the first
//! candidate that reaches the best score.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{WIN_SCORE, alpha_beta};
pub use minimax::{DRAW_SCORE, LOSS_SCORE, VICTORY_SCORE, exhaustive_minimax};

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found, or `None` when there was nothing to search.
    pub best_move: Option<usize>,
    /// Score of the position after `best_move`, from the searching side's view.
    pub score: i32,
    /// Number of positions visited.
    pub nodes: u64,
}

impl SearchOutcome {
    /// Outcome for a position with no candidate moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }
}
