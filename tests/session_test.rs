//! Tests for the play, history and self-test flows.

use noughts::{
    GameConfig, InteractiveSource, Mark, Outcome, OutcomeToken, ScriptedSource, Session,
};
use std::io::Cursor;
use tempfile::TempDir;

fn setup_session() -> (TempDir, Session) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = GameConfig::default()
        .with_log_path(dir.path().join("results.csv"))
        .with_opponent_seed(11);
    (dir, Session::new(config))
}

#[test]
fn test_play_records_outcome_and_renders_board() {
    let (_dir, session) = setup_session();
    let player_x = Box::new(ScriptedSource::new(
        "Script",
        Mark::X,
        vec![4, 0, 8, 2, 6, 1, 3, 5, 7],
    ));
    let mut out = Vec::new();
    let outcome = session.play(player_x, session.opponent(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("---------"));
    assert!(text.contains(&outcome.to_string()));
    assert!(text.contains(&format!("Game result saved: {}", outcome.token())));

    let recorded: Vec<OutcomeToken> = session
        .log()
        .read_all()
        .unwrap()
        .map(|t| t.unwrap())
        .collect();
    assert_eq!(recorded, vec![outcome.token()]);
}

#[test]
fn test_interactive_player_through_session() {
    let (_dir, session) = setup_session();
    // Garbage first, then every square; illegal ones are re-prompted.
    let input = Cursor::new(b"oops\n0\n1\n2\n3\n4\n5\n6\n7\n8\n".to_vec());
    let player_x = Box::new(InteractiveSource::new("Human", Mark::X, input, std::io::sink()));
    let mut out = Vec::new();
    let outcome = session.play(player_x, session.opponent(), &mut out).unwrap();
    assert!(matches!(outcome, Outcome::Winner(_) | Outcome::Draw));
}

#[test]
fn test_aborted_match_is_logged_as_error() {
    let (_dir, session) = setup_session();
    let player_x = Box::new(ScriptedSource::new("Script", Mark::X, vec![]));
    let mut out = Vec::new();
    let outcome = session.play(player_x, session.opponent(), &mut out).unwrap();

    assert!(matches!(outcome, Outcome::Aborted(_)));
    assert_eq!(session.log().summary().unwrap().errors(), &1);
}

#[test]
fn test_log_failure_still_displays_result() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(
        GameConfig::default()
            .with_log_path(dir.path())
            .with_opponent_seed(5),
    );
    let player_x = Box::new(ScriptedSource::new(
        "Script",
        Mark::X,
        vec![4, 0, 8, 2, 6, 1, 3, 5, 7],
    ));
    let mut out = Vec::new();
    let outcome = session.play(player_x, session.opponent(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Could not save game result to file"));
    assert!(text.contains(&format!("Displaying result instead: {}", outcome.token())));
}

#[test]
fn test_history_without_log() {
    let (_dir, session) = setup_session();
    let mut out = Vec::new();
    session.show_history(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No game results found.\n");
}

#[test]
fn test_history_lists_records_and_summary() {
    let (_dir, session) = setup_session();
    session.log().append(&OutcomeToken::O).unwrap();
    session.log().append(&OutcomeToken::Draw).unwrap();

    let mut out = Vec::new();
    session.show_history(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Previous Game Results:\n- O\n- Draw\n2 games: X won 0, O won 1, 1 drawn, 0 aborted\n"
    );
}

#[test]
fn test_self_test_reports_all_passing() {
    let (_dir, session) = setup_session();
    let mut out = Vec::new();
    let report = session.run_self_test(&mut out).unwrap();
    assert!(report.all_passed());

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Running Tests\n"));
    assert!(text.contains("test_check_winner ... ok"));
    assert!(text.ends_with(&format!("{} passed, 0 failed\n", report.passed())));
}
