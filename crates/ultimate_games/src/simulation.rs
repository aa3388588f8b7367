//! Engine-vs-engine batch runs.

use super::orchestrator::Orchestrator;
use super::players::EnginePlayer;
use anyhow::{Context, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use ultimate_engine::{Difficulty, RandomSource, RngSource};
use ultimate_tictactoe::GameSession;

/// Totals from a batch of engine games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Tier playing X.
    x: Difficulty,
    /// Tier playing O.
    o: Difficulty,
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
    /// Seed used, if the run was reproducible.
    seed: Option<u64>,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (X) vs {} (O), {} games", self.x.label(), self.o.label(), self.games)?;
        write!(
            f,
            "X wins: {}  O wins: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

fn source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    }
}

/// Plays `games` engine games in one session and tallies the results.
///
/// With a seed, X draws from `seed` and O from `seed + 1`, so the same
/// arguments always produce the same report.
#[instrument]
pub fn run_simulation(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<SimulationReport> {
    let player_x = EnginePlayer::new("X", x, source(seed));
    let player_o = EnginePlayer::new("O", o, source(seed.map(|s| s.wrapping_add(1))));
    let mut orchestrator = Orchestrator::new(Box::new(player_x), Box::new(player_o));

    let mut session = GameSession::new();
    for game in 0..games {
        session.reset();
        orchestrator
            .run_game(&mut session, |_| {})
            .with_context(|| format!("Simulation failed in game {}", game + 1))?;
    }

    let scores = session.scores();
    info!(%scores, "Simulation finished");
    Ok(SimulationReport {
        x,
        o,
        games,
        x_wins: scores.x_wins(),
        o_wins: scores.o_wins(),
        draws: scores.draws(),
        seed,
    })
}
