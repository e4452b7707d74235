//! Interactive terminal game against the AI.

use anyhow::{Context, Result};
use gamehub_engine::{AiPlayer, BoardState, Difficulty, Mark, Outcome, Ruleset};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reads a move as a cell index or `row,col`.
pub fn parse_move<R: Ruleset>(input: &str) -> Option<usize> {
    let input = input.trim();
    match input.split_once(',') {
        Some((row, col)) => {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            BoardState::<R>::index_of(row, col)
        }
        None => input.parse().ok(),
    }
}

/// Plays one game, reading the human's moves from `input`.
///
/// Returns `None` if `input` ends before the game does.
#[instrument(skip_all, fields(ruleset = R::NAME, %difficulty, ?human))]
pub fn run<R: Ruleset>(
    player: &AiPlayer,
    difficulty: Difficulty,
    human: Mark,
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Outcome>> {
    let mut state = BoardState::<R>::new();
    info!("Game started");

    let outcome = loop {
        if let Some(outcome) = state.check_result() {
            break outcome;
        }
        writeln!(output, "\n{}\n", state)?;

        let index = if state.to_move() == human {
            match read_human_move(&state, input, output)? {
                Some(index) => index,
                None => return Ok(None),
            }
        } else {
            let index = player
                .choose_move(&state, difficulty, rng)
                .context("AI found no move on an ongoing board")?;
            let (row, col) = BoardState::<R>::coords(index);
            writeln!(output, "AI plays {},{} ({})", row, col, index)?;
            index
        };

        state = state.apply_move(index)?;
    };

    writeln!(output, "\n{}\n", state)?;
    let verdict = match outcome.winner() {
        Some(winner) if winner == human => "You win!".to_string(),
        Some(winner) => format!("{} wins.", R::symbol(winner)),
        None => "Draw.".to_string(),
    };
    writeln!(output, "{}", verdict)?;
    info!(%outcome, "Game finished");
    Ok(Some(outcome))
}

/// Prompts until a legal move is entered. Bad input is ignored with a notice.
fn read_human_move<R: Ruleset>(
    state: &BoardState<R>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(
            output,
            "{} to move (index or row,col): ",
            R::symbol(state.to_move())
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_move::<R>(&line) {
            Some(index) if state.is_valid_move(index) => return Ok(Some(index)),
            Some(index) => {
                debug!(index, "Rejected move");
                writeln!(output, "Cell {} is not available, try again.", index)?;
            }
            None => {
                debug!(input = line.trim(), "Unparseable move");
                writeln!(output, "Could not read {:?}, try again.", line.trim())?;
            }
        }
    }
}
