//! Ruleset configurations.
//!
//! Both games share one engine: a flat row-major grid, strictly alternating
//! marks, a line-completion win condition and a search-driven AI. A
//! [`Ruleset`] supplies the parts that differ (board side, win length, the
//! terminal scan, candidate restriction and the search strategy).

use crate::candidates::neighbourhood_candidates;
use crate::config::EngineConfig;
use crate::difficulty::Difficulty;
use crate::rules::win::{THREE_BY_THREE_LINES, first_complete_line, scan_for_run};
use crate::search::{SearchOutcome, alpha_beta, exhaustive_minimax};
use crate::types::{Cell, Mark};
use std::fmt::Debug;

/// Static description of a board game played on a square grid.
pub trait Ruleset: Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static {
    /// Human-readable name, used in logs.
    const NAME: &'static str;
    /// Number of cells along one edge.
    const SIDE: usize;
    /// Number of consecutive marks needed to win.
    const WIN_LENGTH: usize;
    /// Printable symbols for [`Mark::First`] and [`Mark::Second`].
    const SYMBOLS: [char; 2];
    /// Total number of cells.
    const SIZE: usize = Self::SIDE * Self::SIDE;

    /// Finds a completed line, returning its owner and indices.
    fn find_win(cells: &[Cell]) -> Option<(Mark, Vec<usize>)>;

    /// Moves worth considering in this position.
    ///
    /// Defaults to every empty cell in ascending order.
    fn candidate_moves(cells: &[Cell]) -> Vec<usize> {
        empty_cells(cells)
    }

    /// Picks a move for `ai` at a searching difficulty.
    ///
    /// `cells` is a scratch copy; implementations may place and retract
    /// stones on it but must hand it back unchanged.
    fn search(
        cells: &mut [Cell],
        ai: Mark,
        difficulty: Difficulty,
        config: &EngineConfig,
    ) -> SearchOutcome;

    /// Symbol printed for `mark`.
    fn symbol(mark: Mark) -> char {
        Self::SYMBOLS[mark.index()]
    }

    /// Mark printed as `symbol`, if any.
    fn mark_for(symbol: char) -> Option<Mark> {
        if symbol == Self::SYMBOLS[0] {
            Some(Mark::First)
        } else if symbol == Self::SYMBOLS[1] {
            Some(Mark::Second)
        } else {
            None
        }
    }
}

/// Every empty cell, ascending.
pub fn empty_cells(cells: &[Cell]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

/// 3×3 tic-tac-toe, X moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TicTacToe;

impl Ruleset for TicTacToe {
    const NAME: &'static str = "tictactoe";
    const SIDE: usize = 3;
    const WIN_LENGTH: usize = 3;
    const SYMBOLS: [char; 2] = ['X', 'O'];

    fn find_win(cells: &[Cell]) -> Option<(Mark, Vec<usize>)> {
        first_complete_line(cells, &THREE_BY_THREE_LINES)
    }

    fn search(
        cells: &mut [Cell],
        ai: Mark,
        _difficulty: Difficulty,
        _config: &EngineConfig,
    ) -> SearchOutcome {
        // Nine cells: the full tree is always small enough.
        exhaustive_minimax::<Self>(cells, ai)
    }
}

/// 15×15 gomoku (free-style, overlines win), black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gomoku;

impl Gomoku {
    /// Chebyshev radius around existing stones that candidates are drawn from.
    pub const CANDIDATE_RADIUS: usize = 2;
}

impl Ruleset for Gomoku {
    const NAME: &'static str = "gomoku";
    const SIDE: usize = 15;
    const WIN_LENGTH: usize = 5;
    const SYMBOLS: [char; 2] = ['B', 'W'];

    fn find_win(cells: &[Cell]) -> Option<(Mark, Vec<usize>)> {
        scan_for_run(cells, Self::SIDE, Self::WIN_LENGTH)
    }

    fn candidate_moves(cells: &[Cell]) -> Vec<usize> {
        neighbourhood_candidates(cells, Self::SIDE, Self::CANDIDATE_RADIUS)
    }

    fn search(
        cells: &mut [Cell],
        ai: Mark,
        difficulty: Difficulty,
        config: &EngineConfig,
    ) -> SearchOutcome {
        let depth = match difficulty {
            Difficulty::Hard => *config.gomoku_hard_depth(),
            Difficulty::Medium => *config.gomoku_medium_depth(),
            // The controller never searches at easy; a direct caller gets
            // the shallowest configured search.
            Difficulty::Easy => *config.gomoku_medium_depth(),
        };
        alpha_beta::<Self>(cells, ai, depth)
    }
}
