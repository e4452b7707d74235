//! Game rules shared by every ruleset.
//!
//! Pure functions over a flat row-major cell slice. Rules are separated
//! from board storage so the search can run them on a scratch buffer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{DIRECTIONS, first_complete_line, scan_for_run};

use crate::ruleset::Ruleset;
use crate::types::{Cell, Outcome};

/// Terminal verdict for `cells`, or `None` while the game is ongoing.
///
/// A completed line takes precedence over a full board.
pub fn check_result<R: Ruleset>(cells: &[Cell]) -> Option<Outcome> {
    if let Some((winner, line)) = R::find_win(cells) {
        return Some(Outcome::Win { winner, line });
    }
    if is_full(cells) {
        return Some(Outcome::Draw);
    }
    None
}

/// Moves `k` steps from `(row, col)` along `(dr, dc)`, staying on a
/// `side`×`side` board.
#[inline]
pub(crate) fn step(
    side: usize,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    k: isize,
) -> Option<usize> {
    let r = row as isize + dr * k;
    let c = col as isize + dc * k;
    let bound = side as isize;
    if r < 0 || r >= bound || c < 0 || c >= bound {
        return None;
    }
    Some(r as usize * side + c as usize)
}
