//! Difficulty controller: turns a position and a difficulty into a move.

use crate::board::BoardState;
use crate::config::EngineConfig;
use crate::difficulty::Difficulty;
use crate::ruleset::Ruleset;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// How a move was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Only one candidate existed.
    Forced,
    /// Uniform random choice among the candidates.
    Random,
    /// Chosen by the ruleset's search.
    Searched {
        /// Score of the chosen move.
        score: i32,
        /// Positions visited.
        nodes: u64,
    },
}

/// A chosen move and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Cell index to play.
    pub index: usize,
    /// Why this cell.
    pub reason: Reason,
}

/// Computer player with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    config: EngineConfig,
}

impl AiPlayer {
    /// Creates a player using `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Picks a move for the side to move, or `None` when there are no candidates.
    pub fn choose_move<R: Ruleset>(
        &self,
        state: &BoardState<R>,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        self.decide(state, difficulty, rng).map(|d| d.index)
    }

    /// Like [`AiPlayer::choose_move`], also reporting how the move was picked.
    #[instrument(skip(self, state, rng), fields(ruleset = R::NAME, to_move = ?state.to_move()))]
    pub fn decide<R: Ruleset>(
        &self,
        state: &BoardState<R>,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Option<Decision> {
        let candidates = state.candidate_moves();

        let decision = match candidates.as_slice() {
            [] => {
                debug!("No candidate moves");
                return None;
            }
            [only] => Decision {
                index: *only,
                reason: Reason::Forced,
            },
            _ => match difficulty {
                Difficulty::Easy => Self::random(&candidates, rng)?,
                Difficulty::Medium if rng.random_bool(*self.config.medium_random_rate()) => {
                    debug!(rate = self.config.medium_random_rate(), "Medium fell back to random");
                    Self::random(&candidates, rng)?
                }
                Difficulty::Medium | Difficulty::Hard => {
                    let mut scratch = state.cells().to_vec();
                    let outcome =
                        R::search(&mut scratch, state.to_move(), difficulty, &self.config);
                    Decision {
                        index: outcome.best_move?,
                        reason: Reason::Searched {
                            score: outcome.score,
                            nodes: outcome.nodes,
                        },
                    }
                }
            },
        };

        debug!(
            %difficulty,
            index = decision.index,
            reason = ?decision.reason,
            "AI move chosen"
        );
        Some(decision)
    }

    fn random(candidates: &[usize], rng: &mut impl Rng) -> Option<Decision> {
        candidates.choose(rng).map(|&index| Decision {
            index,
            reason: Reason::Random,
        })
    }
}

/// Picks a move with the default configuration.
///
/// ```
/// use gamehub_engine::{Difficulty, GomokuState, ai_move};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(ai_move(&GomokuState::new(), Difficulty::Easy, &mut rng), Some(112));
/// ```
pub fn ai_move<R: Ruleset>(
    state: &BoardState<R>,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<usize> {
    AiPlayer::default().choose_move(state, difficulty, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GomokuState, TicTacToeState};
    use crate::types::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_has_no_move() {
        let state = TicTacToeState::parse("XOX XOO OXX", Mark::Second).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in Difficulty::ALL {
            assert_eq!(ai_move(&state, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_single_candidate_is_forced() {
        let state = TicTacToeState::parse("XOX XOO OX.", Mark::First).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let decision = AiPlayer::default()
            .decide(&state, Difficulty::Hard, &mut rng)
            .unwrap();
        assert_eq!(decision.index, 8);
        assert_eq!(decision.reason, Reason::Forced);
    }

    #[test]
    fn test_easy_is_random_and_valid() {
        let state = TicTacToeState::replay(&[4]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let decision = AiPlayer::default()
            .decide(&state, Difficulty::Easy, &mut rng)
            .unwrap();
        assert_eq!(decision.reason, Reason::Random);
        assert!(state.is_valid_move(decision.index));
    }

    #[test]
    fn test_medium_never_random_at_zero_rate() {
        let config = EngineConfig::new(0.0, 2, 4).unwrap();
        let player = AiPlayer::new(config);
        let state = TicTacToeState::parse("XX. OO. ...", Mark::First).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let decision = player.decide(&state, Difficulty::Medium, &mut rng).unwrap();
            assert_eq!(decision.index, 2);
            assert!(matches!(decision.reason, Reason::Searched { .. }));
        }
    }

    #[test]
    fn test_medium_always_random_at_full_rate() {
        let config = EngineConfig::new(1.0, 2, 4).unwrap();
        let player = AiPlayer::new(config);
        let state = GomokuState::replay(&[112]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let decision = player.decide(&state, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(decision.reason, Reason::Random);
        assert!(state.candidate_moves().contains(&decision.index));
    }

    #[test]
    fn test_hard_blocks_opponent() {
        // O threatens the middle row; X must take 5.
        let state = TicTacToeState::parse("X.. OO. ..X", Mark::First).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(ai_move(&state, Difficulty::Hard, &mut rng), Some(5));
    }
}
