//! The pruned search and the evaluator against straightforward reference
//! versions: every ray scored, plain minimax, full window at the root.

use gamehub_engine::{
    AiPlayer, Cell, DIRECTIONS, Difficulty, EngineConfig, Gomoku, GomokuState, Mark, WIN_SCORE,
    alpha_beta, check_result, evaluate_board, neighbourhood_candidates, score_line,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: isize = 15;

/// Casts a ray from every cell in every direction and scores each one
/// long enough to hold a five.
fn reference_evaluate(cells: &[Cell], mark: Mark) -> i32 {
    let mut score = 0;
    for (dr, dc) in DIRECTIONS {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let mut ray = Vec::new();
                let (mut r, mut c) = (row, col);
                while (0..SIDE).contains(&r) && (0..SIDE).contains(&c) {
                    ray.push(cells[(r * SIDE + c) as usize]);
                    r += dr;
                    c += dc;
                }
                if ray.len() >= 5 {
                    score += score_line(&ray, mark) - score_line(&ray, mark.opponent());
                }
            }
        }
    }
    score
}

fn reference_value(cells: &mut [Cell], ai: Mark, depth: u8, maximizing: bool) -> i32 {
    if let Some(outcome) = check_result::<Gomoku>(cells) {
        let win = WIN_SCORE + i32::from(depth);
        return match outcome.winner() {
            Some(winner) if winner == ai => win,
            Some(_) => -win,
            None => 0,
        };
    }
    if depth == 0 {
        return reference_evaluate(cells, ai);
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let mut best: Option<i32> = None;
    for index in neighbourhood_candidates(cells, 15, 2) {
        cells[index] = Some(mover);
        let score = reference_value(cells, ai, depth - 1, !maximizing);
        cells[index] = None;
        best = Some(match best {
            None => score,
            Some(b) if maximizing => b.max(score),
            Some(b) => b.min(score),
        });
    }
    best.unwrap_or_else(|| reference_evaluate(cells, ai))
}

/// Scores every root candidate independently; the first best one wins.
fn reference_search(cells: &mut [Cell], ai: Mark, depth: u8) -> (Option<usize>, i32) {
    let mut best: Option<(usize, i32)> = None;
    for index in neighbourhood_candidates(cells, 15, 2) {
        cells[index] = Some(ai);
        let score = reference_value(cells, ai, depth - 1, false);
        cells[index] = None;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    match best {
        Some((index, score)) => (Some(index), score),
        None => (None, 0),
    }
}

/// Six stones scattered around the centre, black to move.
fn scattered_position(rng: &mut impl Rng) -> GomokuState {
    let mut state = GomokuState::new();
    while state.stone_count() < 6 {
        let index = GomokuState::index_of(rng.random_range(4..11), rng.random_range(4..11));
        if let Some(index) = index.filter(|&i| state.is_valid_move(i)) {
            state = state.apply_move(index).unwrap();
        }
    }
    state
}

#[test]
fn test_evaluator_scores_every_ray() {
    let mut rng = StdRng::seed_from_u64(404);
    for _ in 0..20 {
        let state = scattered_position(&mut rng);
        for mark in [Mark::First, Mark::Second] {
            assert_eq!(
                evaluate_board::<Gomoku>(state.cells(), mark),
                reference_evaluate(state.cells(), mark),
                "{}",
                state
            );
        }
    }
}

#[test]
fn test_pruned_search_matches_reference_at_depth_two() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..10 {
        let state = scattered_position(&mut rng);
        let mut cells = state.cells().to_vec();

        let expected = reference_search(&mut cells, state.to_move(), 2);
        let outcome = alpha_beta::<Gomoku>(&mut cells, state.to_move(), 2);
        assert_eq!((outcome.best_move, outcome.score), expected, "{}", state);
        assert_eq!(cells, state.cells());
    }
}

#[test]
fn test_medium_choice_matches_reference() {
    let player = AiPlayer::new(EngineConfig::new(0.0, 2, 4).unwrap());
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..5 {
        let state = scattered_position(&mut rng);
        let mut cells = state.cells().to_vec();
        let (expected, _) = reference_search(&mut cells, state.to_move(), 2);
        assert_eq!(
            player.choose_move(&state, Difficulty::Medium, &mut rng),
            expected,
            "{}",
            state
        );
    }
}
