//! Depth-limited alpha-beta search for large boards.
//!
//! Maximizes at the searching side's plies and minimizes at the opponent's,
//! over [`Ruleset::candidate_moves`]. Terminal nodes score
//! `±(WIN_SCORE + remaining depth)`, which prefers quicker wins and slower
//! losses; nodes at the depth horizon are scored with [`evaluate_board`].

use super::SearchOutcome;
use crate::eval::evaluate_board;
use crate::rules::check_result;
use crate::ruleset::Ruleset;
use crate::types::{Cell, Mark};
use std::marker::PhantomData;

/// Base score of a won position, before the remaining-depth bonus.
pub const WIN_SCORE: i32 = 1_000_000;

/// Searches `depth` plies ahead (including the move being chosen) for `ai`,
/// who is to move.
///
/// Each root candidate is scored by a full search of its subtree; the
/// first candidate with the highest score is returned. The root passes its
/// best score down as alpha, which prunes more without changing which
/// candidate wins the tie-break. `cells` is restored before returning.
pub fn alpha_beta<R: Ruleset>(cells: &mut [Cell], ai: Mark, depth: u8) -> SearchOutcome {
    let candidates = R::candidate_moves(cells);
    if candidates.is_empty() {
        return SearchOutcome::no_move();
    }

    let depth = depth.max(1);
    let remaining = depth - 1;
    // Nothing can beat winning on the spot.
    let ceiling = WIN_SCORE + i32::from(remaining);

    let mut searcher = Searcher::<R> {
        ai,
        nodes: 0,
        ruleset: PhantomData,
    };
    let mut best_move = candidates[0];
    let mut best_score = i32::MIN;

    for index in candidates {
        cells[index] = Some(ai);
        let score = searcher.node(cells, remaining, best_score, i32::MAX, false);
        cells[index] = None;
        if score > best_score {
            best_score = score;
            best_move = index;
        }
        if best_score >= ceiling {
            break;
        }
    }

    SearchOutcome {
        best_move: Some(best_move),
        score: best_score,
        nodes: searcher.nodes,
    }
}

struct Searcher<R> {
    ai: Mark,
    nodes: u64,
    ruleset: PhantomData<R>,
}

impl<R: Ruleset> Searcher<R> {
    fn node(
        &mut self,
        cells: &mut [Cell],
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if let Some(outcome) = check_result::<R>(cells) {
            let win = WIN_SCORE + i32::from(depth);
            return match outcome.winner() {
                Some(winner) if winner == self.ai => win,
                Some(_) => -win,
                None => 0,
            };
        }
        if depth == 0 {
            return evaluate_board::<R>(cells, self.ai);
        }

        let candidates = R::candidate_moves(cells);
        if candidates.is_empty() {
            return evaluate_board::<R>(cells, self.ai);
        }

        if maximizing {
            let mut best = i32::MIN;
            for index in candidates {
                cells[index] = Some(self.ai);
                let score = self.node(cells, depth - 1, alpha, beta, false);
                cells[index] = None;
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let opponent = self.ai.opponent();
            let mut best = i32::MAX;
            for index in candidates {
                cells[index] = Some(opponent);
                let score = self.node(cells, depth - 1, alpha, beta, true);
                cells[index] = None;
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
