//! Match session: board, turn order and running score.

use super::error::InvalidMove;
use super::invariants::{InvariantSet, SessionInvariants};
use super::machine::{apply_move, judge, next_player};
use super::rules::WinLine;
use super::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Cumulative results across the games of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Games won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Games won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Games drawn.
    #[getter(copy)]
    draws: u32,
}

impl Scores {
    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Square that was marked.
    pub index: usize,
    /// Player who moved.
    pub player: Player,
    /// Board after the move.
    pub board: Board,
    /// Status after the move.
    pub status: GameStatus,
    /// The completed line, when the move won the game.
    pub winning_line: Option<WinLine>,
}

/// A match between two players, possibly spanning several games.
///
/// The session is the only long-lived mutable state. All rule checks are
/// delegated to the pure functions in [`crate::machine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    active: bool,
    scores: Scores,
    winning_line: Option<WinLine>,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            scores: Scores::default(),
            winning_line: None,
        }
    }

    /// Resumes play from an arbitrary position.
    ///
    /// The session is active only if the board is still in progress.
    /// The position is not validated; check it with
    /// [`SessionInvariants`] if it did not come from legal play.
    #[instrument]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let verdict = judge(&board);
        Self {
            board,
            current_player: to_move,
            active: !verdict.status.is_terminal(),
            scores: Scores::default(),
            winning_line: verdict.line,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or who moved last, once finished).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// False once the current game has been won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the running score.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Status of the current game.
    pub fn status(&self) -> GameStatus {
        judge(&self.board).status
    }

    /// The line that won the current game, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Plays a move for the current player.
    ///
    /// On success the board is updated, the game is judged, and either the
    /// turn passes or the game ends: scores update once and the session
    /// becomes inactive. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameOver`] if the session is inactive
    /// - [`InvalidMove::OutOfBounds`] / [`InvalidMove::Occupied`] from the board rules
    /// - [`InvalidMove::InvariantViolation`] if a debug-build check fails
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidMove> {
        if !self.active {
            warn!(index, "Move attempted on finished game");
            return Err(InvalidMove::GameOver);
        }

        let player = self.current_player;
        let board = apply_move(&self.board, index, player).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;
        let verdict = judge(&board);

        let mut next = self.clone();
        next.board = board;
        if verdict.status.is_terminal() {
            next.active = false;
            next.winning_line = verdict.line;
            next.scores.record(verdict.status);
            info!(status = %verdict.status, scores = %next.scores, "Game over");
        } else {
            next.current_player = next_player(player);
            debug!(index, next = %next.current_player, "Move applied");
        }

        if cfg!(debug_assertions) {
            SessionInvariants::check_all(&next).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(%descriptions, "Postcondition failed");
                InvalidMove::InvariantViolation(format!("Postcondition failed: {}", descriptions))
            })?;
        }

        *self = next;
        Ok(MoveOutcome {
            index,
            player,
            board,
            status: verdict.status,
            winning_line: verdict.line,
        })
    }

    /// Starts a new game, keeping the running score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(scores = %self.scores, "Resetting board for rematch");
        self.board = Board::new();
        self.current_player = Player::X;
        self.active = true;
        self.winning_line = None;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
