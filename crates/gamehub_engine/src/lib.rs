//! Gamehub engine - board state, rules and search AI for tic-tac-toe and gomoku
//!
//! Both games run on one generic engine parameterized by a [`Ruleset`]:
//!
//! - **Board**: immutable [`BoardState`] values; [`BoardState::apply_move`]
//!   returns a new state
//! - **Rules**: win/draw detection through [`BoardState::check_result`]
//! - **AI**: exhaustive minimax (tic-tac-toe) or depth-limited alpha-beta
//!   with a pattern evaluator (gomoku), behind three [`Difficulty`] tiers
//!
//! The engine does no I/O. Randomness is always passed in by the caller.
//!
//! # Example
//!
//! ```
//! use gamehub_engine::{Difficulty, TicTacToeState, ai_move};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut state = TicTacToeState::new();
//! while state.check_result().is_none() {
//!     let index = ai_move(&state, Difficulty::Hard, &mut rng).unwrap();
//!     state = state.apply_move(index).unwrap();
//! }
//! assert!(state.check_result().unwrap().is_draw());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod board;
mod candidates;
mod config;
mod contracts;
mod difficulty;
mod error;
mod eval;
mod invariants;
mod rules;
mod ruleset;
mod search;
mod snapshot;
mod types;

// Crate-level exports - Core types
pub use types::{Cell, Mark, Outcome};

// Crate-level exports - Rulesets and board state
pub use board::{BoardState, GomokuState, TicTacToeState};
pub use ruleset::{Gomoku, Ruleset, TicTacToe, empty_cells};

// Crate-level exports - Rules
pub use rules::{DIRECTIONS, check_result, first_complete_line, is_full, scan_for_run};

// Crate-level exports - Validation
pub use contracts::{CellIsEmpty, Contract, InBounds, LegalMove, MoveContract};
pub use error::MoveError;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, LastMoveRecordedInvariant,
    MonotonicBoardInvariant, MoveInvariants, Transition,
};

// Crate-level exports - Search and evaluation
pub use candidates::neighbourhood_candidates;
pub use eval::{RunScore, evaluate_board, score_line, score_run};
pub use search::{
    DRAW_SCORE, LOSS_SCORE, SearchOutcome, VICTORY_SCORE, WIN_SCORE, alpha_beta,
    exhaustive_minimax,
};

// Crate-level exports - AI
pub use ai::{AiPlayer, Decision, Reason, ai_move};
pub use config::{ConfigError, EngineConfig};
pub use difficulty::Difficulty;

// Crate-level exports - Serialization
pub use snapshot::{EMPTY_SYMBOL, Snapshot, SnapshotError};
