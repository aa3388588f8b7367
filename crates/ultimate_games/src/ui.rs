//! Plain-text board rendering and result messages.

use ultimate_tictactoe::{Board, GameStatus, Player, Square, WinLine};

/// Renders the board for a terminal.
///
/// Empty squares show their index. Squares on `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<WinLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for start in [0, 3, 6] {
        let cells: Vec<String> = (start..start + 3)
            .map(|index| render_square(board, index, highlight))
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

fn render_square(board: &Board, index: usize, highlight: Option<WinLine>) -> String {
    let text = match board.get(index) {
        Some(Square::Occupied(mark)) => mark.symbol().to_string(),
        _ => index.to_string(),
    };
    if highlight.is_some_and(|line| line.contains(index)) {
        format!("[{}]", text)
    } else {
        format!(" {} ", text)
    }
}

/// Message announcing a finished game.
///
/// In Player vs AI mode `engine_mark` names the engine's mark, so its wins
/// read as "AI wins!". Pass `None` when two humans are playing.
pub fn announce(status: GameStatus, engine_mark: Option<Player>) -> String {
    match status {
        GameStatus::Won(mark) if Some(mark) == engine_mark => "AI wins!".to_string(),
        GameStatus::Won(mark) => format!("Player {} wins!", mark),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => "Game in progress".to_string(),
    }
}

/// True if the answer to "Play again?" means yes.
pub fn wants_rematch(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
