//! Win detection.
//!
//! The small board checks a fixed table of lines; the large board scans
//! every occupied cell in row-major order and tries each direction in
//! [`DIRECTIONS`] order. Both return the first line found, so the reported
//! line is deterministic.

use super::step;
use crate::types::{Cell, Mark};

/// Line directions in scan order: horizontal, vertical, diagonal ↘, diagonal ↙.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The eight lines of a 3×3 board: rows, then columns, then diagonals.
pub const THREE_BY_THREE_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line in `lines` held entirely by one mark.
pub fn first_complete_line<const N: usize>(
    cells: &[Cell],
    lines: &[[usize; N]],
) -> Option<(Mark, Vec<usize>)> {
    lines.iter().find_map(|line| {
        let owner = cells.get(*line.first()?).copied().flatten()?;
        line.iter()
            .all(|&i| cells.get(i).copied().flatten() == Some(owner))
            .then(|| (owner, line.to_vec()))
    })
}

/// Returns the first `length`-cell run of one mark on a `side`×`side` board.
///
/// Runs are anchored at their first cell in scan order, so any window of a
/// longer run counts: six in a row is still a win.
pub fn scan_for_run(cells: &[Cell], side: usize, length: usize) -> Option<(Mark, Vec<usize>)> {
    for (index, cell) in cells.iter().enumerate() {
        let Some(mark) = *cell else {
            continue;
        };
        let (row, col) = (index / side, index % side);
        for direction in DIRECTIONS {
            if let Some(line) = run_from(cells, side, row, col, direction, length, mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

fn run_from(
    cells: &[Cell],
    side: usize,
    row: usize,
    col: usize,
    direction: (isize, isize),
    length: usize,
    mark: Mark,
) -> Option<Vec<usize>> {
    let mut line = Vec::with_capacity(length);
    for k in 0..length as isize {
        let index = step(side, row, col, direction, k)?;
        if cells[index] != Some(mark) {
            return None;
        }
        line.push(index);
    }
    Some(line)
}
