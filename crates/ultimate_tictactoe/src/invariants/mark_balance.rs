//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{Board, GameSession, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: count(X) - count(O) is 0 or 1.
///
/// X always moves first and turns strictly alternate, so no legal sequence
/// of moves can break this.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Board>>::holds(session.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
