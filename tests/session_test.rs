//! Tests for the multi-session registry.

use std::thread;
use tictactoe::{Phase, RecordingDisplay, SessionError, SessionManager};

#[test]
fn test_sessions_are_independent() {
    let manager = SessionManager::new();
    manager
        .create_session("a".to_string(), RecordingDisplay::new())
        .unwrap();
    manager
        .create_session("b".to_string(), RecordingDisplay::new())
        .unwrap();

    manager
        .with_session("a", |engine| {
            engine.start_game("Alice", "Bob");
            for index in [0, 3, 1, 4, 2] {
                engine.handle_cell_click(index).unwrap();
            }
        })
        .unwrap();

    let phase_b = manager.with_session("b", |engine| engine.phase()).unwrap();
    assert_eq!(phase_b, Phase::Setup);

    let status_a = manager
        .with_session("a", |engine| engine.display().status().to_string())
        .unwrap();
    assert_eq!(status_a, "Alice wins!");
    assert_eq!(manager.list_sessions().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_duplicate_session_rejected() {
    let manager = SessionManager::new();
    manager
        .create_session("dup".to_string(), RecordingDisplay::new())
        .unwrap();
    let err = manager
        .create_session("dup".to_string(), RecordingDisplay::new())
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::AlreadyExists {
            id: "dup".to_string()
        }
    );
}

#[test]
fn test_missing_session() {
    let manager: SessionManager<RecordingDisplay> = SessionManager::new();
    let err = manager.with_session("nope", |_| ()).unwrap_err();
    assert!(matches!(err, SessionError::NotFound { .. }));
    assert!(manager.remove_session("nope").is_err());
}

#[test]
fn test_remove_session() {
    let manager = SessionManager::new();
    manager
        .create_session("gone".to_string(), RecordingDisplay::new())
        .unwrap();
    manager.remove_session("gone").unwrap();
    assert!(manager.list_sessions().unwrap().is_empty());
}

#[test]
fn test_concurrent_clicks_apply_once_each() {
    let manager = SessionManager::new();
    manager
        .create_session("shared".to_string(), RecordingDisplay::new())
        .unwrap();
    manager
        .with_session("shared", |engine| engine.start_game("Alice", "Bob"))
        .unwrap();

    // Every thread clicks the same cell; exactly one placement may win.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = manager.clone();
            thread::spawn(move || {
                manager
                    .with_session("shared", |engine| engine.handle_cell_click(4).unwrap())
                    .unwrap()
            })
        })
        .collect();

    let placed = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|outcome| *outcome == tictactoe::ClickOutcome::Placed)
        .count();
    assert_eq!(placed, 1);

    let current = manager
        .with_session("shared", |engine| {
            engine.current_player().unwrap().name().to_string()
        })
        .unwrap();
    assert_eq!(current, "Bob");
}
