//! Game rules for tic-tac-toe.
//!
//! Pure functions for judging a board. Rules are kept apart from board
//! storage so the search engine can call them on hypothetical positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};
