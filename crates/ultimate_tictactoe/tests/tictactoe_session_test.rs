//! Tests for the session lifecycle seen by a front end.

use ultimate_tictactoe::{GameSession, GameStatus, InvalidMove, Player, Position, WinLine};

#[test]
fn test_full_game_with_rematch() {
    let mut session = GameSession::new();

    // O takes the anti-diagonal
    for position in [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::Center,
        Position::BottomRight,
    ] {
        let outcome = session.play_move(position.to_index()).unwrap();
        assert_eq!(outcome.status, GameStatus::InProgress);
    }
    let outcome = session.play_move(Position::BottomLeft.to_index()).unwrap();
    assert_eq!(outcome.player, Player::O);
    assert_eq!(outcome.status, GameStatus::Won(Player::O));
    assert_eq!(outcome.winning_line, Some(WinLine([2, 4, 6])));
    assert_eq!(session.scores().o_wins(), 1);

    session.reset();
    assert_eq!(session.scores().o_wins(), 1);
    assert_eq!(session.current_player(), Player::X);
    assert!(session.play_move(Position::Center.to_index()).is_ok());
}

#[test]
fn test_errors_are_recoverable() {
    let mut session = GameSession::new();
    session.play_move(0).unwrap();

    let err = session.play_move(0).unwrap_err();
    assert_eq!(err, InvalidMove::Occupied(0));
    assert!(err.to_string().contains("occupied"));

    // Still O's turn after the rejected move
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.play_move(1).unwrap().player, Player::O);
}

#[test]
fn test_session_serializes() {
    let mut session = GameSession::new();
    session.play_move(4).unwrap();
    let json = serde_json::to_string(&session).unwrap();
    let back: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
