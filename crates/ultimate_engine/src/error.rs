//! Search error types.

use derive_more::{Display, Error};
use tracing::instrument;
use ultimate_tictactoe::InvalidMove;

/// Engine precondition failure with location tracking.
///
/// Raised only when the engine is asked to move on a board that has no
/// legal move. Legal play through [`ultimate_tictactoe::GameSession`] never
/// gets there, so treat this as a caller bug rather than a game event.
#[derive(Debug, Clone, Display, Error)]
#[display("Search error: {} at {}:{}", message, file, line)]
pub struct SearchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InvalidMove> for SearchError {
    #[track_caller]
    fn from(err: InvalidMove) -> Self {
        Self::new(format!("Rejected move during search: {}", err))
    }
}
