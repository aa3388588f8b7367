//! Move search and difficulty policy for Ultimate Tic-Tac-Toe.
//!
//! [`best_move`] runs a full-depth minimax over copies of the board.
//! [`choose_move`] layers the three [`Difficulty`] tiers on top of it,
//! drawing any randomness from a caller-supplied [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use ultimate_engine::{Difficulty, RngSource, engine_move};
//! use ultimate_tictactoe::GameSession;
//!
//! let mut session = GameSession::new();
//! let mut rng = RngSource::seeded(42);
//! while session.is_active() {
//!     let index = engine_move(&session, Difficulty::Hard, &mut rng)?;
//!     session.play_move(index)?;
//! }
//! assert_eq!(session.scores().draws(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod error;
mod minimax;
mod policy;
mod random;

pub use difficulty::Difficulty;
pub use error::SearchError;
pub use minimax::{DRAW, LOSS, WIN, best_move, position_value};
pub use policy::{MEDIUM_OPTIMAL_PROBABILITY, choose_move, engine_move, random_move};
pub use random::{RandomSource, RngSource, ScriptedSource};
