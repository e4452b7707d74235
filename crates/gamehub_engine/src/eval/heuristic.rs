//! Heuristic evaluation of a large-board position.
//!
//! A ray is cast from every cell in each of the four directions and runs to
//! the board edge; every ray at least as long as the win length is scored
//! with [`score_line`]. The start of a ray counts as a closed end, so a run
//! is scored once per ray that reaches it. The result is symmetric:
//! `evaluate_board(c, m)` equals `-evaluate_board(c, m.opponent())`.

use super::patterns::score_run;
use crate::rules::{DIRECTIONS, step};
use crate::ruleset::Ruleset;
use crate::types::{Cell, Mark};

/// Evaluates `cells` from `mark`'s point of view.
///
/// Positive values favour `mark`.
#[must_use]
pub fn evaluate_board<R: Ruleset>(cells: &[Cell], mark: Mark) -> i32 {
    let opponent = mark.opponent();
    let mut line = Vec::with_capacity(R::SIDE);
    let mut score = 0;

    for direction in DIRECTIONS {
        for start in 0..cells.len() {
            let (row, col) = (start / R::SIDE, start % R::SIDE);
            // Each maximal line is collected once; the rays cast from its
            // cells are exactly its suffixes.
            if step(R::SIDE, row, col, direction, -1).is_some() {
                continue;
            }
            line.clear();
            let mut k = 0;
            while let Some(index) = step(R::SIDE, row, col, direction, k) {
                line.push(cells[index]);
                k += 1;
            }
            for ray in (0..line.len()).map(|s| &line[s..]) {
                if ray.len() < R::WIN_LENGTH {
                    break;
                }
                score += score_line(ray, mark) - score_line(ray, opponent);
            }
        }
    }
    score
}

/// Sums the run scores of `mark` along one line.
///
/// Board edges and opposing stones close a run; an empty cell opens it and
/// also counts as the open start of the next run.
pub fn score_line(line: &[Cell], mark: Mark) -> i32 {
    let mut score = 0;
    let mut length = 0;
    let mut open_ends = 0u8;

    for cell in line {
        match *cell {
            Some(m) if m == mark => length += 1,
            None => {
                if length > 0 {
                    score += score_run(length, open_ends + 1);
                    length = 0;
                }
                open_ends = 1;
            }
            Some(_) => {
                if length > 0 {
                    score += score_run(length, open_ends);
                    length = 0;
                }
                open_ends = 0;
            }
        }
    }
    if length > 0 {
        score += score_run(length, open_ends);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RunScore;
    use crate::ruleset::Gomoku;

    const B: Cell = Some(Mark::First);
    const W: Cell = Some(Mark::Second);
    const E: Cell = None;

    fn idx(row: usize, col: usize) -> usize {
        row * 15 + col
    }

    #[test]
    fn test_open_and_half_open_runs() {
        assert_eq!(score_line(&[E, B, B, B, E], Mark::First), RunScore::OPEN_THREE);
        assert_eq!(score_line(&[W, B, B, B, E], Mark::First), RunScore::HALF_OPEN_THREE);
        assert_eq!(score_line(&[B, B, B, B, E], Mark::First), RunScore::HALF_OPEN_FOUR);
        assert_eq!(score_line(&[W, B, B, W, E], Mark::First), 0);
    }

    #[test]
    fn test_runs_share_a_gap() {
        // _BB_B_ : open two plus open one.
        let line = [E, B, B, E, B, E];
        assert_eq!(score_line(&line, Mark::First), RunScore::OPEN_TWO + RunScore::OPEN_ONE);
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(evaluate_board::<Gomoku>(&vec![None; 225], Mark::First), 0);
    }

    #[test]
    fn test_single_centre_stone() {
        let mut cells = vec![None; 225];
        cells[idx(7, 7)] = B;
        // Per direction: seven rays start before the stone and see an open
        // one, the ray starting on it sees a half-open one.
        let per_direction = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        assert_eq!(evaluate_board::<Gomoku>(&cells, Mark::First), 4 * per_direction);
        assert_eq!(evaluate_board::<Gomoku>(&cells, Mark::Second), -4 * per_direction);
    }

    #[test]
    fn test_corner_stone_rays() {
        let mut cells = vec![None; 225];
        cells[idx(0, 14)] = B;
        // Row 0: eleven rays of length >= 5 end on the stone at the edge.
        // Column and ↙ diagonal: one ray each, starting on the stone.
        // ↘ diagonal: a single cell, too short to score.
        assert_eq!(evaluate_board::<Gomoku>(&cells, Mark::First), 13 * RunScore::HALF_OPEN_ONE);
    }

    #[test]
    fn test_rays_overlap_on_runs() {
        // A lone open two in the middle of row 7 is seen by every ray that
        // starts at or before it; the ray starting on its second stone sees
        // a half-open one.
        let mut cells = vec![None; 225];
        cells[idx(7, 6)] = B;
        cells[idx(7, 7)] = B;
        let row: i32 = 6 * RunScore::OPEN_TWO + RunScore::HALF_OPEN_TWO + RunScore::HALF_OPEN_ONE;
        // Every other line holds one stone. (7,6) sits at position 6 of the
        // ↘ diagonal starting at (1,0) and at position 7 elsewhere.
        let column_6 = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        let column_7 = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        let diagonal_6 = 6 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        let anti_6 = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        let diagonal_7 = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        let anti_7 = 7 * RunScore::OPEN_ONE + RunScore::HALF_OPEN_ONE;
        assert_eq!(
            evaluate_board::<Gomoku>(&cells, Mark::First),
            row + column_6 + column_7 + diagonal_6 + anti_6 + diagonal_7 + anti_7
        );
    }

    #[test]
    fn test_symmetry() {
        let mut cells = vec![None; 225];
        cells[idx(7, 7)] = B;
        cells[idx(7, 8)] = B;
        cells[idx(8, 8)] = W;
        cells[idx(6, 6)] = W;
        let black = evaluate_board::<Gomoku>(&cells, Mark::First);
        let white = evaluate_board::<Gomoku>(&cells, Mark::Second);
        assert_eq!(black, -white);
    }

    #[test]
    fn test_open_four_dominates() {
        let mut cells = vec![None; 225];
        for col in 3..7 {
            cells[idx(7, col)] = B;
        }
        assert!(evaluate_board::<Gomoku>(&cells, Mark::First) >= RunScore::OPEN_FOUR);
    }
}
