//! Ultimate Tic-Tac-Toe - terminal front end
//!
//! Interactive play against the engine or another person, plus batch
//! simulation of engine matches.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_engine::{Difficulty, RandomSource, RngSource};
use ultimate_games::cli::{Cli, Command, Mode};
use ultimate_games::players::{self, EnginePlayer, HumanPlayer, SharedInput};
use ultimate_games::ui::{announce, render_board, wants_rematch};
use ultimate_games::{GameConfig, GameEvent, Orchestrator, run_simulation};
use ultimate_tictactoe::{GameSession, Player};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            config,
            seed,
            think_delay_ms,
        } => run_play(mode, difficulty, config, seed, think_delay_ms),
        Command::Simulate {
            x,
            o,
            games,
            seed,
            json,
        } => run_simulate(x, o, games, seed, json),
    }
}

/// Run an interactive match until the user declines a rematch
#[instrument]
fn run_play(
    mode: Mode,
    difficulty: Option<Difficulty>,
    config_path: PathBuf,
    seed: Option<u64>,
    think_delay_ms: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_overrides(difficulty, seed, think_delay_ms);
    info!(?mode, ?config, "Starting match");

    let input = SharedInput::stdin();
    let engine_mark = match mode {
        Mode::Ai => Some(*config.engine_mark()),
        Mode::Pvp => None,
    };

    let seat = |mark: Player| -> Box<dyn players::Player> {
        if Some(mark) == engine_mark {
            let rng: Box<dyn RandomSource> = match config.seed() {
                Some(seed) => Box::new(RngSource::seeded(*seed)),
                None => Box::new(RngSource::thread()),
            };
            Box::new(
                EnginePlayer::new("AI", *config.difficulty(), rng)
                    .with_think_delay(Duration::from_millis(*config.think_delay_ms())),
            )
        } else {
            Box::new(HumanPlayer::new(format!("Player {}", mark), input.clone()))
        }
    };
    let mut orchestrator = Orchestrator::new(seat(Player::X), seat(Player::O));

    match engine_mark {
        Some(mark) => println!(
            "Player vs AI ({}). The AI plays {}.",
            config.difficulty().label(),
            mark
        ),
        None => println!("Player vs Player."),
    }
    println!("Enter a square as 0-8 or by name, e.g. \"center\" or \"top-left\".");

    let mut session = GameSession::new();
    loop {
        orchestrator.run_game(&mut session, |event| print_event(event, engine_mark))?;

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        match input.read_line()? {
            Some(answer) if wants_rematch(&answer) => session.reset(),
            _ => break,
        }
    }

    println!("Final score: {}", session.scores());
    Ok(())
}

fn print_event(event: &GameEvent, engine_mark: Option<Player>) {
    match event {
        GameEvent::Turn { mark, name, board } => {
            println!("\n{}\n", render_board(board, None));
            println!("{} ({}) to move", name, mark);
        }
        GameEvent::MoveMade { name, position, .. } => {
            println!("{} takes square {}", name, position);
        }
        GameEvent::Rejected { name, error } => {
            println!("{}: {}", name, error);
        }
        GameEvent::GameOver {
            status,
            winning_line,
            board,
            scores,
            ..
        } => {
            println!("\n{}\n", render_board(board, *winning_line));
            println!("{}", announce(*status, engine_mark));
            println!("{}", scores);
        }
    }
}

/// Run an engine-vs-engine batch
#[instrument]
fn run_simulate(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let report = run_simulation(x, o, games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
