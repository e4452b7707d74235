//! Board state model.
//!
//! A [`BoardState`] is an immutable value: [`BoardState::apply_move`]
//! returns a new state and leaves its input untouched.

use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::rules::{self, is_full};
use crate::ruleset::{Gomoku, Ruleset, TicTacToe, empty_cells};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Position of a game under ruleset `R`.
///
/// Serializes as a [`Snapshot`]: a flat symbol string plus the turn marker.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Snapshot", into = "Snapshot", bound = "")]
pub struct BoardState<R: Ruleset> {
    pub(crate) cells: Vec<Cell>,
    pub(crate) to_move: Mark,
    pub(crate) last_move: Option<usize>,
    pub(crate) ruleset: PhantomData<R>,
}

/// A tic-tac-toe position.
pub type TicTacToeState = BoardState<TicTacToe>;

/// A gomoku position.
pub type GomokuState = BoardState<Gomoku>;

impl<R: Ruleset> BoardState<R> {
    /// Creates the starting position: an empty board with the first mark to move.
    pub fn new() -> Self {
        Self {
            cells: vec![None; R::SIZE],
            to_move: Mark::First,
            last_move: None,
            ruleset: PhantomData,
        }
    }

    /// Builds a state from raw parts, checking the cell count.
    pub fn from_parts(
        cells: Vec<Cell>,
        to_move: Mark,
        last_move: Option<usize>,
    ) -> Result<Self, SnapshotError> {
        if cells.len() != R::SIZE {
            return Err(SnapshotError::WrongCellCount {
                expected: R::SIZE,
                found: cells.len(),
            });
        }
        if let Some(index) = last_move {
            match cells.get(index) {
                None => return Err(SnapshotError::LastMoveOutOfBounds(index)),
                Some(None) => return Err(SnapshotError::LastMoveEmpty(index)),
                Some(Some(_)) => {}
            }
        }
        Ok(Self {
            cells,
            to_move,
            last_move,
            ruleset: PhantomData,
        })
    }

    /// Parses a grid of symbols (`.` for empty); whitespace is ignored.
    ///
    /// ```
    /// use gamehub_engine::{Mark, TicTacToeState};
    ///
    /// let state = TicTacToeState::parse("XX. OO. ...", Mark::First).unwrap();
    /// assert_eq!(state.valid_moves(), vec![2, 5, 6, 7, 8]);
    /// ```
    pub fn parse(text: &str, to_move: Mark) -> Result<Self, SnapshotError> {
        Snapshot::new(text.to_string(), to_move, None).try_into()
    }

    /// Rebuilds a game by applying `moves` in order to the starting position.
    #[instrument(skip(moves), fields(ruleset = R::NAME, moves = moves.len()))]
    pub fn replay(moves: &[usize]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, &index| state.apply_move(index))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Index of the most recently placed stone.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Number of cells on the board.
    pub fn size(&self) -> usize {
        R::SIZE
    }

    /// Cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Index of `(row, col)`, or `None` when off the board.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        (row < R::SIDE && col < R::SIDE).then_some(row * R::SIDE + col)
    }

    /// `(row, col)` of `index`.
    pub fn coords(index: usize) -> (usize, usize) {
        (index / R::SIDE, index % R::SIDE)
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        is_full(&self.cells)
    }

    /// True iff `index` is on the board and its cell is empty.
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Every legal move, ascending.
    pub fn valid_moves(&self) -> Vec<usize> {
        empty_cells(&self.cells)
    }

    /// Moves the AI considers here; see [`Ruleset::candidate_moves`].
    pub fn candidate_moves(&self) -> Vec<usize> {
        R::candidate_moves(&self.cells)
    }

    /// Places the side to move's mark at `index` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] for an
    /// illegal move; the board is never modified in that case.
    #[instrument(skip(self), fields(ruleset = R::NAME, to_move = ?self.to_move))]
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        MoveContract::pre(self, &index)?;

        let mut next = self.clone();
        next.cells[index] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        next.last_move = Some(index);

        if cfg!(debug_assertions) {
            MoveContract::post(self, &next)?;
        }
        debug!(index, "Move applied");
        Ok(next)
    }

    /// Terminal verdict, or `None` while the game is ongoing.
    #[instrument(skip(self), fields(ruleset = R::NAME))]
    pub fn check_result(&self) -> Option<Outcome> {
        rules::check_result::<R>(&self.cells)
    }
}

impl<R: Ruleset> Default for BoardState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ruleset> std::fmt::Debug for BoardState<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("ruleset", &R::NAME)
            .field("cells", &Snapshot::encode_cells::<R>(&self.cells))
            .field("to_move", &self.to_move)
            .field("last_move", &self.last_move)
            .finish()
    }
}

impl<R: Ruleset> std::fmt::Display for BoardState<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(R::SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = cells
                .iter()
                .map(|cell| cell.map_or('.', R::symbol))
                .collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
