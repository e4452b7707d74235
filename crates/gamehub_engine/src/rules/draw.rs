//! Draw detection.

use crate::types::Cell;

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a draw.
pub fn is_full(cells: &[Cell]) -> bool {
    cells.iter().all(Option::is_some)
}
