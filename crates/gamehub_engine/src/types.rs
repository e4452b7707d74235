//! Core domain types shared by every ruleset.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Marks carry no ruleset-specific meaning; a ruleset maps them to the
/// symbols it prints (`X`/`O` for tic-tac-toe, `B`/`W` for gomoku).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Position of this mark in a ruleset's symbol table.
    pub fn index(self) -> usize {
        match self {
            Mark::First => 0,
            Mark::Second => 1,
        }
    }
}

/// A board cell: a mark, or `None` when empty.
pub type Cell = Option<Mark>;

/// Terminal verdict for a position.
///
/// An ongoing game has no outcome; see [`crate::BoardState::check_result`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `winner` completed `line`, listed in scan order.
    Win {
        /// The winning mark.
        winner: Mark,
        /// Indices of the completed line.
        line: Vec<usize>,
    },
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line, or `None` on a draw.
    pub fn winning_line(&self) -> Option<&[usize]> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { winner, line } => write!(f, "{:?} wins along {:?}", winner, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
