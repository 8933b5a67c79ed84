use super::*;
use crate::kernel::services::adapters::WriterDisplay;

#[test]
fn replay_types_and_commits() {
    let mut session = HeadlessSession::default();
    let display = session
        .replay(["2", "+", "2", "enter"])
        .expect("known keys");
    assert_eq!(display.expression, "4");
    assert_eq!(display.preview, "= 4");
}

#[test]
fn replay_handles_percent_and_comma() {
    let mut session = HeadlessSession::default();
    let display = session
        .replay(["2", "0", "0", "+", "1", "0", "%"])
        .expect("known keys");
    assert_eq!(display.preview, "= 200.1");

    let mut session = HeadlessSession::default();
    let display = session.replay(["1", ",", "5"]).expect("known keys");
    assert_eq!(display.expression, "1.5");
}

#[test]
fn replay_stops_at_quit() {
    let mut session = HeadlessSession::default();
    let display = session
        .replay(["7", "ctrl+q", "8"])
        .expect("known keys");
    assert!(session.is_quit());
    assert_eq!(display.expression, "7");
}

#[test]
fn unbound_keys_are_ignored() {
    let mut session = HeadlessSession::default();
    assert_eq!(session.feed_key_name("a"), Ok(KeyOutcome::Unbound));
    assert_eq!(session.display().expression, "0");
}

#[test]
fn unknown_key_names_error() {
    let mut session = HeadlessSession::default();
    let err = session.replay(["1", "banana"]).unwrap_err();
    assert_eq!(err, HeadlessError::UnknownKey("banana".to_string()));
    assert_eq!(err.to_string(), "unknown key name `banana`");
}

#[test]
fn rejected_dot_reports_no_change() {
    let mut session = HeadlessSession::default();
    session.replay(["3", ".", "5"]).expect("known keys");
    assert_eq!(
        session.feed_key_name("."),
        Ok(KeyOutcome::Dispatched {
            state_changed: false
        })
    );
}

#[test]
fn error_flash_after_failed_commit() {
    let mut session = HeadlessSession::default();
    let display = session.replay(["5", "/", "enter"]).expect("known keys");
    assert_eq!(display.expression, "Err");
    assert_eq!(display.preview, "= 0");
}

#[test]
fn present_writes_both_lines() {
    let mut session = HeadlessSession::default();
    session.replay(["9", "*", "9"]).expect("known keys");
    let mut port = WriterDisplay::new(Vec::new());
    session.present(&mut port).expect("write");
    assert_eq!(
        String::from_utf8(port.into_inner()).expect("utf8"),
        "9*9\n= 81\n"
    );
}
