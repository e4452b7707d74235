//! Gamehub - terminal front end
//!
//! Plays tic-tac-toe and gomoku against the engine's AI, suggests moves for
//! serialized positions, and runs AI-vs-AI matches.

#![warn(missing_docs)]

mod cli;
mod matchup;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameKind};
use gamehub_engine::{AiPlayer, BoardState, Difficulty, EngineConfig, Gomoku, Ruleset, TicTacToe};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!(?config, "Engine config");
    let player = AiPlayer::new(config);

    match cli.command {
        Command::Play {
            game,
            difficulty,
            human_first,
            ai_first,
            seed,
        } => {
            let human = cli::human_mark(human_first, ai_first);
            let mut rng = make_rng(seed);
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            let outcome = match game {
                GameKind::Tictactoe => play::run::<TicTacToe>(
                    &player, difficulty, human, &mut rng, &mut input, &mut output,
                )?,
                GameKind::Gomoku => play::run::<Gomoku>(
                    &player, difficulty, human, &mut rng, &mut input, &mut output,
                )?,
            };
            if outcome.is_none() {
                info!("Input closed before the game ended");
            }
            Ok(())
        }
        Command::Suggest {
            game,
            difficulty,
            state,
            seed,
        } => {
            let suggestion = match game {
                GameKind::Tictactoe => suggest::<TicTacToe>(&player, difficulty, &state, seed)?,
                GameKind::Gomoku => suggest::<Gomoku>(&player, difficulty, &state, seed)?,
            };
            match suggestion {
                Some(index) => println!("{}", index),
                None => println!("none"),
            }
            Ok(())
        }
        Command::Match {
            game,
            first,
            second,
            games,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let tally = match game {
                GameKind::Tictactoe => {
                    matchup::run::<TicTacToe>(&player, first, second, games, &mut rng)
                }
                GameKind::Gomoku => matchup::run::<Gomoku>(&player, first, second, games, &mut rng),
            };
            println!("{}", tally);
            Ok(())
        }
    }
}

/// Installs the fmt subscriber, writing to stderr.
///
/// `--log-level` wins over `RUST_LOG`; with neither, only warnings are shown.
fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Decodes a JSON position and asks the AI for a move.
#[instrument(skip(player, json), fields(ruleset = R::NAME))]
fn suggest<R: Ruleset>(
    player: &AiPlayer,
    difficulty: Difficulty,
    json: &str,
    seed: Option<u64>,
) -> Result<Option<usize>> {
    let state: BoardState<R> =
        serde_json::from_str(json).context("Failed to parse --state as a board position")?;
    let mut rng = make_rng(seed);
    Ok(player.choose_move(&state, difficulty, &mut rng))
}
