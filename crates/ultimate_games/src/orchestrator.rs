//! Game orchestration between players.

use super::players;
use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{Board, GameSession, GameStatus, InvalidMove, Player, Scores, WinLine};

/// A player may return this many rejected moves in a row before the game is
/// abandoned.
pub const MAX_CONSECUTIVE_REJECTIONS: usize = 3;

/// Events emitted to the presentation layer while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to move.
    Turn {
        /// Mark to move.
        mark: Player,
        /// Name of the player holding that mark.
        name: String,
        /// Board before the move.
        board: Board,
    },
    /// Move was made.
    MoveMade {
        /// Mark that moved.
        mark: Player,
        /// Name of the player who moved.
        name: String,
        /// Square that was marked.
        position: usize,
        /// Board after the move.
        board: Board,
    },
    /// The session refused a player's move.
    Rejected {
        /// Name of the player whose move was refused.
        name: String,
        /// Why it was refused.
        error: InvalidMove,
    },
    /// Game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Name of the winner, if any.
        winner: Option<String>,
        /// Line to highlight, if the game was won.
        winning_line: Option<WinLine>,
        /// Final board.
        board: Board,
        /// Running score including this game.
        scores: Scores,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    player_x: Box<dyn players::Player>,
    player_o: Box<dyn players::Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn players::Player>, player_o: Box<dyn players::Player>) -> Self {
        Self { player_x, player_o }
    }

    /// The player holding `mark`.
    pub fn seat(&self, mark: Player) -> &dyn players::Player {
        match mark {
            Player::X => self.player_x.as_ref(),
            Player::O => self.player_o.as_ref(),
        }
    }

    fn seat_mut(&mut self, mark: Player) -> &mut Box<dyn players::Player> {
        match mark {
            Player::X => &mut self.player_x,
            Player::O => &mut self.player_o,
        }
    }

    /// Plays the session's current game to the end.
    ///
    /// Starts from whatever position the session holds; call
    /// [`GameSession::reset`] first for a fresh game.
    #[instrument(skip_all)]
    pub fn run_game<F>(&mut self, session: &mut GameSession, mut on_event: F) -> Result<GameStatus>
    where
        F: FnMut(&GameEvent),
    {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );

        let mut rejections = 0;
        while session.is_active() {
            let mark = session.current_player();
            let name = self.seat(mark).name().to_string();
            on_event(&GameEvent::Turn {
                mark,
                name: name.clone(),
                board: *session.board(),
            });

            debug!(player = %name, "Waiting for move");
            let index = self.seat_mut(mark).get_move(session)?;

            match session.play_move(index) {
                Ok(outcome) => {
                    rejections = 0;
                    on_event(&GameEvent::MoveMade {
                        mark,
                        name,
                        position: outcome.index,
                        board: outcome.board,
                    });
                }
                Err(error) => {
                    rejections += 1;
                    warn!(player = %name, %error, rejections, "Move rejected");
                    on_event(&GameEvent::Rejected {
                        name: name.clone(),
                        error,
                    });
                    if rejections >= MAX_CONSECUTIVE_REJECTIONS {
                        bail!("{} made {} invalid moves in a row", name, rejections);
                    }
                }
            }
        }

        let status = session.status();
        let winner = status.winner().map(|mark| self.seat(mark).name().to_string());
        info!(%status, winner = ?winner, "Game finished");
        on_event(&GameEvent::GameOver {
            status,
            winner,
            winning_line: session.winning_line(),
            board: *session.board(),
            scores: session.scores(),
        });
        Ok(status)
    }
}
