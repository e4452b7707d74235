//! Exhaustive minimax for the small board.
//!
//! No depth limit and no pruning. Terminal positions score
//! [`VICTORY_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`] regardless of how deep
//! they are, so among several winning moves the first in index order wins.

use super::SearchOutcome;
use crate::rules::check_result;
use crate::ruleset::Ruleset;
use crate::types::{Cell, Mark};
use std::marker::PhantomData;

/// Score of a position the searching side has won.
pub const VICTORY_SCORE: i32 = 10;
/// Score of a position the searching side has lost.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Solves the position for `ai`, who is to move.
///
/// Candidates are tried in [`Ruleset::candidate_moves`] order and the first
/// one attaining the best score is returned. `cells` is restored before
/// returning.
pub fn exhaustive_minimax<R: Ruleset>(cells: &mut [Cell], ai: Mark) -> SearchOutcome {
    let mut solver = Solver::<R> {
        ai,
        nodes: 0,
        ruleset: PhantomData,
    };

    let mut best: Option<(usize, i32)> = None;
    for index in R::candidate_moves(cells) {
        cells[index] = Some(ai);
        let score = solver.value(cells, false);
        cells[index] = None;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) => SearchOutcome {
            best_move: Some(index),
            score,
            nodes: solver.nodes,
        },
        None => SearchOutcome::no_move(),
    }
}

struct Solver<R> {
    ai: Mark,
    nodes: u64,
    ruleset: PhantomData<R>,
}

impl<R: Ruleset> Solver<R> {
    fn value(&mut self, cells: &mut [Cell], maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(outcome) = check_result::<R>(cells) {
            return match outcome.winner() {
                Some(winner) if winner == self.ai => VICTORY_SCORE,
                Some(_) => LOSS_SCORE,
                None => DRAW_SCORE,
            };
        }

        let mark = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..cells.len() {
            if cells[index].is_some() {
                continue;
            }
            cells[index] = Some(mark);
            let score = self.value(cells, !maximizing);
            cells[index] = None;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::TicTacToe;

    fn cells(text: &str) -> Vec<Cell> {
        text.chars().map(TicTacToe::mark_for).collect()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O . / X X . / . . .  with O to move: 2 completes the row.
        let mut board = cells("OO.XX....");
        let outcome = exhaustive_minimax::<TicTacToe>(&mut board, Mark::Second);
        assert_eq!(outcome.best_move, Some(2));
        assert_eq!(outcome.score, VICTORY_SCORE);
    }

    #[test]
    fn test_restores_scratch_board() {
        let original = cells("X...O....");
        let mut board = original.clone();
        exhaustive_minimax::<TicTacToe>(&mut board, Mark::First);
        assert_eq!(board, original);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = vec![None; 9];
        let outcome = exhaustive_minimax::<TicTacToe>(&mut board, Mark::First);
        assert_eq!(outcome.score, DRAW_SCORE);
        // Every opening draws, so the first cell is kept.
        assert_eq!(outcome.best_move, Some(0));
        assert!(outcome.nodes > 500_000);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = cells("XOXXOXOXO");
        let outcome = exhaustive_minimax::<TicTacToe>(&mut board, Mark::First);
        assert_eq!(outcome, SearchOutcome::no_move());
    }
}
