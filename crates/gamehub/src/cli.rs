//! Command-line interface for gamehub.

use clap::{Parser, Subcommand, ValueEnum};
use gamehub_engine::{Difficulty, Mark};
use std::path::PathBuf;

/// Gamehub - tic-tac-toe and gomoku against a search AI
#[derive(Parser, Debug)]
#[command(name = "gamehub")]
#[command(about = "Play tic-tac-toe and gomoku against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config TOML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "gamehub_engine=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Which game to play.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// 3×3, three in a row
    Tictactoe,
    /// 15×15, five in a row
    Gomoku,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the AI
    Play {
        /// Game to play
        #[arg(short, long, value_enum)]
        game: GameKind,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Move first (default)
        #[arg(long, conflicts_with = "ai_first")]
        human_first: bool,

        /// Let the AI move first
        #[arg(long)]
        ai_first: bool,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the AI's move for a serialized position
    Suggest {
        /// Game the position belongs to
        #[arg(short, long, value_enum)]
        game: GameKind,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Position as JSON, e.g. {"cells":"XX.OO....","to_move":"First"}
        #[arg(long)]
        state: String,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run AI-vs-AI games and print a tally
    Match {
        /// Game to play
        #[arg(short, long, value_enum)]
        game: GameKind,

        /// Difficulty of the side moving first
        #[arg(long)]
        first: Difficulty,

        /// Difficulty of the side moving second
        #[arg(long)]
        second: Difficulty,

        /// Number of games
        #[arg(short = 'n', long, default_value = "10")]
        games: u32,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Mark the human plays, from the `--human-first`/`--ai-first` flags.
///
/// The human moves first unless only `--ai-first` is given.
pub fn human_mark(human_first: bool, ai_first: bool) -> Mark {
    if human_first || !ai_first {
        Mark::First
    } else {
        Mark::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "gamehub", "play", "--game", "gomoku", "--difficulty", "hard", "--ai-first",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                game,
                difficulty,
                ai_first,
                ..
            } => {
                assert_eq!(game, GameKind::Gomoku);
                assert_eq!(difficulty, Difficulty::Hard);
                assert!(ai_first);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_human_mark_from_flags() {
        assert_eq!(human_mark(false, false), Mark::First);
        assert_eq!(human_mark(true, false), Mark::First);
        assert_eq!(human_mark(false, true), Mark::Second);
    }

    #[test]
    fn test_human_first_flag_parses() {
        let cli =
            Cli::try_parse_from(["gamehub", "play", "-g", "tictactoe", "--human-first"]).unwrap();
        match cli.command {
            Command::Play {
                human_first,
                ai_first,
                ..
            } => assert_eq!(human_mark(human_first, ai_first), Mark::First),
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_first_flags_conflict() {
        let result = Cli::try_parse_from([
            "gamehub",
            "play",
            "--game",
            "tictactoe",
            "--human-first",
            "--ai-first",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gamehub", "match", "-g", "tictactoe", "--first", "easy", "--second", "hard",
            "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Match { games: 10, .. }));
    }
}
