//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// One of the eight index triples that completes a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    /// Indices making up the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// True if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Every winning line: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Finds the first completed line and the player who owns it.
///
/// Lines are scanned in [`WIN_LINES`] order. Boards reached through
/// alternating play never hold completed lines for both players, so the
/// first match is the only winner.
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    let squares = board.squares();
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.0;
        match squares[a] {
            Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
