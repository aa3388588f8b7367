//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::{HumanPlayer, MoveInputError, SharedInput, move_prompt, parse_move};

use anyhow::Result;
use ultimate_tictactoe::GameSession;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the square (0-8) for the session's current player.
    fn get_move(&mut self, session: &GameSession) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
