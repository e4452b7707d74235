//! Serializable form of a board position.
//!
//! Cells are stored as one symbol per cell in row-major order, using the
//! ruleset's symbols and `.` for empty cells, so a 15×15 position stays
//! readable in JSON.

use crate::board::BoardState;
use crate::ruleset::Ruleset;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Symbol used for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

/// Plain-data snapshot of a [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// One symbol per cell; whitespace is ignored when decoding.
    pub cells: String,
    /// Mark whose turn it is.
    pub to_move: Mark,
    /// Index of the most recent move, if known.
    #[serde(default)]
    pub last_move: Option<usize>,
}

impl Snapshot {
    /// Encodes cells as ruleset symbols.
    pub fn encode_cells<R: Ruleset>(cells: &[Cell]) -> String {
        cells
            .iter()
            .map(|cell| cell.map_or(EMPTY_SYMBOL, R::symbol))
            .collect()
    }

    /// Decodes ruleset symbols into cells, skipping whitespace.
    pub fn decode_cells<R: Ruleset>(text: &str) -> Result<Vec<Cell>, SnapshotError> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(index, symbol)| match symbol {
                EMPTY_SYMBOL => Ok(None),
                other => R::mark_for(other)
                    .map(Some)
                    .ok_or(SnapshotError::UnknownSymbol { symbol, index }),
            })
            .collect()
    }
}

/// Reasons a snapshot cannot become a board state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The cell string decodes to the wrong number of cells.
    #[display("Expected {} cells, found {}", expected, found)]
    WrongCellCount {
        /// Cells on this ruleset's board.
        expected: usize,
        /// Cells decoded.
        found: usize,
    },

    /// A character is neither a ruleset symbol nor `.`.
    #[display("Unknown symbol {:?} at cell {}", symbol, index)]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Cell position of the character.
        index: usize,
    },

    /// The recorded last move is off the board.
    #[display("Last move {} is out of bounds", _0)]
    LastMoveOutOfBounds(usize),

    /// The recorded last move points at an empty cell.
    #[display("Last move {} points at an empty cell", _0)]
    LastMoveEmpty(usize),
}

impl std::error::Error for SnapshotError {}

impl<R: Ruleset> TryFrom<Snapshot> for BoardState<R> {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let cells = Snapshot::decode_cells::<R>(&snapshot.cells)?;
        BoardState::from_parts(cells, snapshot.to_move, snapshot.last_move)
    }
}

impl<R: Ruleset> From<BoardState<R>> for Snapshot {
    fn from(state: BoardState<R>) -> Self {
        Snapshot::new(
            Snapshot::encode_cells::<R>(&state.cells),
            state.to_move,
            state.last_move,
        )
    }
}
