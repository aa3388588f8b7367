//! Pure state-transition functions for tic-tac-toe.
//!
//! Nothing here holds state: every function maps explicit inputs to a new
//! value, so the search engine can call them on hypothetical boards without
//! touching the game in progress.

use super::error::InvalidMove;
use super::rules::{WinLine, is_full, winning_line};
use super::types::{Board, CELLS, GameStatus, Player};
use tracing::{instrument, trace};

/// Places `player`'s mark at `index`, returning the resulting board.
///
/// # Errors
///
/// - [`InvalidMove::OutOfBounds`] if `index` is not in 0-8
/// - [`InvalidMove::GameOver`] if the board is already won or drawn
/// - [`InvalidMove::Occupied`] if the square is taken
///
/// Turn order is the caller's concern; this only enforces board rules.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, InvalidMove> {
    if index >= CELLS {
        return Err(InvalidMove::OutOfBounds(index));
    }
    if evaluate(board).is_terminal() {
        return Err(InvalidMove::GameOver);
    }
    if !board.is_empty(index) {
        return Err(InvalidMove::Occupied(index));
    }

    trace!("Mark placed");
    Ok(board.with_mark(index, player))
}

/// Status of a board together with the line that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Won, drawn or in progress.
    pub status: GameStatus,
    /// The completed line when `status` is `Won`.
    pub line: Option<WinLine>,
}

/// Judges a board in one scan, keeping the winning line for highlighting.
pub fn judge(board: &Board) -> Verdict {
    if let Some((player, line)) = winning_line(board) {
        Verdict {
            status: GameStatus::Won(player),
            line: Some(line),
        }
    } else if is_full(board) {
        Verdict {
            status: GameStatus::Draw,
            line: None,
        }
    } else {
        Verdict {
            status: GameStatus::InProgress,
            line: None,
        }
    }
}

/// Judges a board: won, drawn or still in progress.
pub fn evaluate(board: &Board) -> GameStatus {
    judge(board).status
}

/// The player who moves after `player`.
pub fn next_player(player: Player) -> Player {
    player.opponent()
}
