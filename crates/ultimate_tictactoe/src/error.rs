//! Errors raised when a move is rejected.

use derive_more::{Display, Error};

/// A move the state machine refused to apply.
///
/// Every variant is recoverable: the board or session is left exactly as it
/// was and the caller may ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the index already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A board invariant failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
