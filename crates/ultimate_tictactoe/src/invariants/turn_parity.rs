//! Turn parity invariant: the player to move matches the mark counts.

use super::super::{GameSession, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: while a game is active, X is to move exactly when both
/// players hold the same number of marks.
///
/// Finished games are exempt; the session keeps the player who made the
/// final move.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        if !session.is_active() {
            return true;
        }

        let board = session.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };

        let valid = session.current_player() == expected;
        if !valid {
            warn!(
                current = %session.current_player(),
                expected = %expected,
                "Turn parity violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
