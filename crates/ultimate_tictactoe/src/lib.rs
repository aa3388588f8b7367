//! Ultimate Tic-Tac-Toe - board, rules and session state
//!
//! Pure game logic with no I/O. The presentation layer drives a
//! [`GameSession`]; the search engine calls the stateless functions in
//! [`machine`] on copies of the board.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4] {
//!     session.play_move(index)?;
//! }
//! let outcome = session.play_move(2)?;
//! assert_eq!(outcome.status, GameStatus::Won(Player::X));
//! assert_eq!(session.scores().x_wins(), 1);
//! # Ok::<(), ultimate_tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
pub mod machine;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::InvalidMove;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, SessionInvariants,
    TurnParityInvariant,
};
pub use machine::{Verdict, apply_move, evaluate, judge, next_player};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, check_winner, winning_line};
pub use session::{GameSession, MoveOutcome, Scores};
pub use types::{Board, CELLS, GameStatus, ParseBoardError, Player, Square};

