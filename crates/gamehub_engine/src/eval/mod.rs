//! Position evaluation for large boards.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, score_line};
pub use patterns::{RunScore, score_run};
