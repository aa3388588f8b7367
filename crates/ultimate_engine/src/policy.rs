//! Difficulty-graded move selection.

use super::difficulty::Difficulty;
use super::error::SearchError;
use super::minimax::best_move;
use super::random::RandomSource;
use tracing::{debug, instrument};
use ultimate_tictactoe::{Board, GameSession, Player, evaluate};

/// Chance that a Medium engine plays the optimal move on a given turn.
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.7;

/// Picks a move for `player` according to `difficulty`.
///
/// - Easy: uniform over empty squares
/// - Medium: rolls once per call; below [`MEDIUM_OPTIMAL_PROBABILITY`] it
///   plays [`best_move`], otherwise a uniform random square
/// - Hard: always [`best_move`]
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already decided or full.
#[instrument(skip(board, rng))]
pub fn choose_move<R>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, SearchError>
where
    R: RandomSource + ?Sized,
{
    let index = match difficulty {
        Difficulty::Easy => random_move(board, rng)?,
        Difficulty::Medium => {
            let roll = rng.next_unit();
            if roll < MEDIUM_OPTIMAL_PROBABILITY {
                debug!(roll, "Medium engine plays optimally");
                best_move(board, player)?
            } else {
                debug!(roll, "Medium engine plays randomly");
                random_move(board, rng)?
            }
        }
        Difficulty::Hard => best_move(board, player)?,
    };

    debug!(index, "Engine chose move");
    Ok(index)
}

/// Picks a uniformly random empty square.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already decided or full.
pub fn random_move<R>(board: &Board, rng: &mut R) -> Result<usize, SearchError>
where
    R: RandomSource + ?Sized,
{
    let status = evaluate(board);
    if status.is_terminal() {
        return Err(SearchError::new(format!(
            "No random move: game is already decided ({})",
            status
        )));
    }

    let empty = board.empty_indices();
    if empty.is_empty() {
        return Err(SearchError::new("No empty square to pick"));
    }
    Ok(empty[rng.pick_index(empty.len())])
}

/// Picks the engine's move for the session's current player.
///
/// Reads the session only; apply the result with
/// [`GameSession::play_move`].
///
/// # Errors
///
/// Returns [`SearchError`] if the session's game is over.
#[instrument(skip(session, rng), fields(player = %session.current_player()))]
pub fn engine_move<R>(
    session: &GameSession,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, SearchError>
where
    R: RandomSource + ?Sized,
{
    if !session.is_active() {
        return Err(SearchError::new("Engine asked to move in a finished game"));
    }
    choose_move(session.board(), session.current_player(), difficulty, rng)
}
