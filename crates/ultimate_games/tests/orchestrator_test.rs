//! Tests for driving games between players.

use anyhow::{Result, bail};
use std::collections::VecDeque;
use ultimate_engine::{Difficulty, ScriptedSource};
use ultimate_games::players::{self, EnginePlayer};
use ultimate_games::{GameEvent, MAX_CONSECUTIVE_REJECTIONS, Orchestrator};
use ultimate_tictactoe::{GameSession, GameStatus, InvalidMove, Player, WinLine};

/// Plays a fixed list of squares, then gives up.
struct ScriptedPlayer {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    fn boxed(name: &str, moves: &[usize]) -> Box<dyn players::Player> {
        Box::new(Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
        })
    }
}

impl players::Player for ScriptedPlayer {
    fn get_move(&mut self, _session: &GameSession) -> Result<usize> {
        match self.moves.pop_front() {
            Some(index) => Ok(index),
            None => bail!("{} ran out of moves", self.name),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[test]
fn test_game_runs_to_a_win() {
    let mut orchestrator = Orchestrator::new(
        ScriptedPlayer::boxed("Alice", &[0, 1, 2]),
        ScriptedPlayer::boxed("Bob", &[3, 4]),
    );
    let mut session = GameSession::new();
    let mut events = Vec::new();

    let status = orchestrator
        .run_game(&mut session, |event| events.push(event.clone()))
        .expect("Game failed");

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(events.len(), 11);
    assert!(matches!(&events[0], GameEvent::Turn { mark: Player::X, name, .. } if name == "Alice"));
    assert!(matches!(&events[3], GameEvent::MoveMade { mark: Player::O, position: 3, .. }));

    match events.last() {
        Some(GameEvent::GameOver {
            status,
            winner,
            winning_line,
            scores,
            ..
        }) => {
            assert_eq!(*status, GameStatus::Won(Player::X));
            assert_eq!(winner.as_deref(), Some("Alice"));
            assert_eq!(*winning_line, Some(WinLine([0, 1, 2])));
            assert_eq!(scores.x_wins(), 1);
        }
        other => panic!("expected GameOver, got {:?}", other),
    }
}

#[test]
fn test_rejected_move_is_retried() {
    let mut orchestrator = Orchestrator::new(
        ScriptedPlayer::boxed("Alice", &[4, 0, 8]),
        ScriptedPlayer::boxed("Bob", &[4, 1, 2, 6]),
    );
    let mut session = GameSession::new();
    let mut rejections = Vec::new();

    let status = orchestrator
        .run_game(&mut session, |event| {
            if let GameEvent::Rejected { name, error } = event {
                rejections.push((name.clone(), error.clone()));
            }
        })
        .expect("Game failed");

    assert_eq!(rejections, vec![("Bob".to_string(), InvalidMove::Occupied(4))]);
    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_repeated_rejections_abandon_the_game() {
    let mut orchestrator = Orchestrator::new(
        ScriptedPlayer::boxed("Alice", &[4]),
        ScriptedPlayer::boxed("Bob", &[4; MAX_CONSECUTIVE_REJECTIONS]),
    );
    let mut session = GameSession::new();

    let err = orchestrator.run_game(&mut session, |_| {}).unwrap_err();
    assert!(err.to_string().contains("Bob"));
    assert!(session.is_active());
    assert_eq!(session.scores().games(), 0);
}

#[test]
fn test_player_error_propagates() {
    let mut orchestrator = Orchestrator::new(
        ScriptedPlayer::boxed("Alice", &[]),
        ScriptedPlayer::boxed("Bob", &[]),
    );
    let mut session = GameSession::new();
    assert!(orchestrator.run_game(&mut session, |_| {}).is_err());
}

#[test]
fn test_hard_engines_draw_and_scores_accumulate() {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("AI X", Difficulty::Hard, Box::new(ScriptedSource::default()))),
        Box::new(EnginePlayer::new("AI O", Difficulty::Hard, Box::new(ScriptedSource::default()))),
    );
    let mut session = GameSession::new();

    for _ in 0..3 {
        session.reset();
        let status = orchestrator.run_game(&mut session, |_| {}).expect("Game failed");
        assert_eq!(status, GameStatus::Draw);
    }
    assert_eq!(session.scores().draws(), 3);
}

#[test]
fn test_finished_session_only_reports_game_over() {
    let mut orchestrator = Orchestrator::new(
        ScriptedPlayer::boxed("Alice", &[0, 1, 2]),
        ScriptedPlayer::boxed("Bob", &[3, 4]),
    );
    let mut session = GameSession::new();
    orchestrator.run_game(&mut session, |_| {}).expect("Game failed");

    let mut events = Vec::new();
    orchestrator
        .run_game(&mut session, |event| events.push(event.clone()))
        .expect("Replay failed");
    assert_eq!(events.len(), 1);
    assert_eq!(orchestrator.seat(Player::O).name(), "Bob");
}
