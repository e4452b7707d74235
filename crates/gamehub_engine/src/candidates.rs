//! Candidate generation for large boards.
//!
//! Searching all 225 cells is infeasible, so the search only considers empty
//! cells near existing stones.

use crate::types::Cell;

/// Empty cells within Chebyshev distance `radius` of any stone.
///
/// Order follows the stones in row-major order, and for each stone its
/// neighbourhood top-left to bottom-right; duplicates keep their first
/// position. An empty board yields only the centre cell. A full board
/// yields nothing.
pub fn neighbourhood_candidates(cells: &[Cell], side: usize, radius: usize) -> Vec<usize> {
    if cells.iter().all(Option::is_none) {
        return vec![cells.len() / 2];
    }

    let radius = radius as isize;
    let bound = side as isize;
    let mut seen = vec![false; cells.len()];
    let mut candidates = Vec::new();

    for (index, cell) in cells.iter().enumerate() {
        if cell.is_none() {
            continue;
        }
        let row = (index / side) as isize;
        let col = (index % side) as isize;
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row + dr, col + dc);
                if r < 0 || r >= bound || c < 0 || c >= bound {
                    continue;
                }
                let neighbour = r as usize * side + c as usize;
                if cells[neighbour].is_none() && !seen[neighbour] {
                    seen[neighbour] = true;
                    candidates.push(neighbour);
                }
            }
        }
    }
    candidates
}
