//! Run scores for gomoku evaluation.
//!
//! A run is scored by its length and by how many of its ends are open
//! (empty and on the board). A run with no open end can never grow into a
//! five and is worth nothing.

/// Run scores used by the evaluator.
pub struct RunScore;

impl RunScore {
    /// Five or more in a row, open or not.
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 50_000;
    /// Four with one open end: XOOOO_
    pub const HALF_OPEN_FOUR: i32 = 10_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 5_000;
    /// Three with one open end.
    pub const HALF_OPEN_THREE: i32 = 1_000;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 500;
    /// Two with one open end.
    pub const HALF_OPEN_TWO: i32 = 100;

    /// Lone stone with space on both sides.
    pub const OPEN_ONE: i32 = 10;
    /// Lone stone with space on one side.
    pub const HALF_OPEN_ONE: i32 = 1;
}

/// Score of one run of `length` stones with `open_ends` open ends (0-2).
pub fn score_run(length: usize, open_ends: u8) -> i32 {
    if length >= 5 {
        return RunScore::FIVE;
    }
    let both = open_ends >= 2;
    match (length, open_ends) {
        (_, 0) => 0,
        (4, _) if both => RunScore::OPEN_FOUR,
        (4, _) => RunScore::HALF_OPEN_FOUR,
        (3, _) if both => RunScore::OPEN_THREE,
        (3, _) => RunScore::HALF_OPEN_THREE,
        (2, _) if both => RunScore::OPEN_TWO,
        (2, _) => RunScore::HALF_OPEN_TWO,
        (1, _) if both => RunScore::OPEN_ONE,
        (1, _) => RunScore::HALF_OPEN_ONE,
        _ => 0,
    }
}
