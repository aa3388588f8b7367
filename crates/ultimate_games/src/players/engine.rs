//! Engine-backed player.

use super::Player;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, instrument};
use ultimate_engine::{Difficulty, RandomSource, engine_move};
use ultimate_tictactoe::GameSession;

/// Computer opponent driven by the difficulty policy.
pub struct EnginePlayer {
    name: String,
    difficulty: Difficulty,
    rng: Box<dyn RandomSource>,
    think_delay: Duration,
}

impl EnginePlayer {
    /// Creates an engine player with no thinking delay.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, rng: Box<dyn RandomSource>) -> Self {
        Self {
            name: name.into(),
            difficulty,
            rng,
            think_delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` before every move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, session), fields(ai = %self.name, difficulty = %self.difficulty))]
    fn get_move(&mut self, session: &GameSession) -> Result<usize> {
        if !self.think_delay.is_zero() {
            debug!(delay_ms = self.think_delay.as_millis() as u64, "AI thinking");
            std::thread::sleep(self.think_delay);
        }

        let index = engine_move(session, self.difficulty, self.rng.as_mut())
            .context("Engine could not choose a move")?;
        debug!(position = index, "AI chose position");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
