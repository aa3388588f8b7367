//! Exhaustive property tests over every reachable board.

use std::collections::HashSet;
use ultimate_tictactoe::{
    Board, GameStatus, Invariant, MarkBalanceInvariant, Player, Square, apply_move, evaluate,
    next_player,
};

/// Collects every board reachable through legal alternating play.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) || evaluate(&board) != GameStatus::InProgress {
            return;
        }
        for index in board.empty_indices() {
            let next = apply_move(&board, index, to_move).expect("empty square on live board");
            walk(next, next_player(to_move), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Player::X, &mut seen);
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal tic-tac-toe positions
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_never_won_by_both_players() {
    for board in reachable_boards() {
        let x_has_line = ultimate_tictactoe::WIN_LINES.iter().any(|line| {
            line.indices()
                .iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(Player::X)))
        });
        let o_has_line = ultimate_tictactoe::WIN_LINES.iter().any(|line| {
            line.indices()
                .iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(Player::O)))
        });
        assert!(!(x_has_line && o_has_line), "both won:\n{}", board.display());
    }
}

#[test]
fn test_mark_balance_on_reachable_boards() {
    for board in reachable_boards() {
        assert!(
            <MarkBalanceInvariant as Invariant<Board>>::holds(&board),
            "unbalanced:\n{}",
            board.display()
        );
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    for board in reachable_boards() {
        let copy = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, copy);
    }
}

#[test]
fn test_last_empty_square_always_finishes_the_game() {
    let mut checked = 0;
    for board in reachable_boards() {
        let empty = board.empty_indices();
        if empty.len() != 1 || evaluate(&board) != GameStatus::InProgress {
            continue;
        }
        // Eight marks placed, so X moves last
        let after = apply_move(&board, empty[0], Player::X).expect("last square is free");
        let status = evaluate(&after);
        assert!(status.is_terminal());
        assert_eq!(evaluate(&after), status);
        if ultimate_tictactoe::check_winner(&after).is_none() {
            assert_eq!(status, GameStatus::Draw);
        }
        checked += 1;
    }
    assert!(checked > 0);
}
