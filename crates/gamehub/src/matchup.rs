//! AI-vs-AI matches.

use gamehub_engine::{AiPlayer, BoardState, Difficulty, Mark, Outcome, Ruleset};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by the side moving first.
    pub first_wins: u32,
    /// Games won by the side moving second.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Mark::First) => self.first_wins += 1,
            Some(Mark::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first: {}  second: {}  draws: {}",
            self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Plays one game between two difficulties, returning its outcome.
pub fn play_game<R: Ruleset>(
    player: &AiPlayer,
    first: Difficulty,
    second: Difficulty,
    rng: &mut impl Rng,
) -> Option<Outcome> {
    let mut state = BoardState::<R>::new();
    loop {
        if let Some(outcome) = state.check_result() {
            return Some(outcome);
        }
        let difficulty = match state.to_move() {
            Mark::First => first,
            Mark::Second => second,
        };
        let index = player.choose_move(&state, difficulty, rng)?;
        state = state.apply_move(index).ok()?;
    }
}

/// Plays `games` games and tallies the results.
#[instrument(skip(player, rng), fields(ruleset = R::NAME))]
pub fn run<R: Ruleset>(
    player: &AiPlayer,
    first: Difficulty,
    second: Difficulty,
    games: u32,
    rng: &mut impl Rng,
) -> Tally {
    let mut tally = Tally::default();
    for game in 0..games {
        match play_game::<R>(player, first, second, rng) {
            Some(outcome) => {
                debug!(game, %outcome, "Game finished");
                tally.record(&outcome);
            }
            None => debug!(game, "Game abandoned"),
        }
    }
    info!(%tally, "Match finished");
    tally
}
