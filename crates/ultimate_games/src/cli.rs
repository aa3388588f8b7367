//! Command-line interface for ultimate_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ultimate_engine::Difficulty;

/// Ultimate Tic-Tac-Toe - play against the engine or watch it play itself
#[derive(Parser, Debug)]
#[command(name = "ultimate_games")]
#[command(about = "Tic-tac-toe with a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who sits opposite the first human.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Player vs AI
    Ai,
    /// Player vs Player on one terminal
    Pvp,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match in the terminal
    Play {
        /// Opponent type
        #[arg(short, long, value_enum, default_value = "ai")]
        mode: Mode,

        /// Engine difficulty (easy, medium, hard); overrides the config file
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Path to match configuration
        #[arg(short, long, default_value = "ultimate.toml")]
        config: PathBuf,

        /// Seed for reproducible engine play
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each engine move, in milliseconds
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Run a batch of engine-vs-engine games and report the totals
    Simulate {
        /// Tier playing X
        #[arg(long, default_value = "easy")]
        x: Difficulty,

        /// Tier playing O
        #[arg(long, default_value = "easy")]
        o: Difficulty,

        /// Number of games
        #[arg(short = 'n', long, default_value = "1000")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["ultimate_games", "play"]).unwrap();
        match cli.command {
            Command::Play {
                mode,
                difficulty,
                config,
                seed,
                think_delay_ms,
            } => {
                assert_eq!(mode, Mode::Ai);
                assert_eq!(difficulty, None);
                assert_eq!(config, PathBuf::from("ultimate.toml"));
                assert_eq!(seed, None);
                assert_eq!(think_delay_ms, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_simulate_flags() {
        let cli = Cli::try_parse_from([
            "ultimate_games",
            "simulate",
            "--x",
            "hard",
            "--o",
            "Medium",
            "-n",
            "50",
            "--seed",
            "9",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Simulate {
                x,
                o,
                games,
                seed,
                json,
            } => {
                assert_eq!(x, Difficulty::Hard);
                assert_eq!(o, Difficulty::Medium);
                assert_eq!(games, 50);
                assert_eq!(seed, Some(9));
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["ultimate_games", "play", "-d", "brutal"]).is_err());
    }
}
