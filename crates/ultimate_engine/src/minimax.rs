//! Exhaustive minimax search.
//!
//! Terminal positions score +1 when the perspective player has won, -1
//! when the opponent has, 0 for a draw. Depth does not discount the score,
//! so a win in five is worth the same as a win in one. Among equally scored
//! moves the lowest index wins.
//!
//! Every branch works on its own copy of the board, obtained through
//! [`apply_move`]. The caller's board is never touched.
//!
//! The recursion carries alpha-beta bounds. Pruned branches can only ever
//! tie or lose against a move already found, so the chosen index matches
//! a plain full-width scan.

use super::error::SearchError;
use tracing::{debug, instrument};
use ultimate_tictactoe::{Board, GameStatus, Player, apply_move, evaluate};

/// Score of a won position.
pub const WIN: i8 = 1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;
/// Score of a lost position.
pub const LOSS: i8 = -1;

/// Picks the optimal square for `player` on `board`.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already decided or full.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Result<usize, SearchError> {
    let status = evaluate(board);
    if status.is_terminal() {
        return Err(SearchError::new(format!(
            "No move to search: game is already decided ({})",
            status
        )));
    }

    let mut best: Option<(usize, i8)> = None;
    for index in board.empty_indices() {
        let child = apply_move(board, index, player)?;
        let alpha = best.map_or(LOSS, |(_, score)| score);
        let score = minimax(&child, player, player.opponent(), alpha, WIN)?;

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
        if score >= WIN {
            break;
        }
    }

    let (index, score) = best.ok_or_else(|| SearchError::new("No empty square to search"))?;
    debug!(index, score, "Best move found");
    Ok(index)
}

/// Game-theoretic value of `board` for `perspective`, with `to_move` to play.
///
/// Searched with the full `[LOSS, WIN]` window, so the value is exact.
pub fn position_value(board: &Board, perspective: Player, to_move: Player) -> Result<i8, SearchError> {
    minimax(board, perspective, to_move, LOSS, WIN)
}

/// Fail-soft alpha-beta minimax over owned board copies.
///
/// Maximizing layers play `perspective`'s mark, minimizing layers the
/// opponent's. The result is exact whenever it falls strictly inside
/// `(alpha, beta)`, and a bound on the correct side otherwise.
fn minimax(
    board: &Board,
    perspective: Player,
    to_move: Player,
    mut alpha: i8,
    mut beta: i8,
) -> Result<i8, SearchError> {
    match evaluate(board) {
        GameStatus::Won(winner) if winner == perspective => return Ok(WIN),
        GameStatus::Won(_) => return Ok(LOSS),
        GameStatus::Draw => return Ok(DRAW),
        GameStatus::InProgress => {}
    }

    let maximizing = to_move == perspective;
    let mut best = if maximizing { LOSS } else { WIN };

    for index in board.empty_indices() {
        let child = apply_move(board, index, to_move)?;
        let score = minimax(&child, perspective, to_move.opponent(), alpha, beta)?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}
