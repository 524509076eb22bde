//! Recognition session lifecycle tests
//!
//! Restart timing uses injected instants, so nothing here sleeps.

mod common;

use std::time::{Duration, Instant};

use common::{drain, ephemerals, listening_session, new_session, statuses};
use voicedrive::Hypothesis;
use voicedrive::voice::{RecognizerEvent, SessionState};

#[test]
fn test_start_then_started_enters_listening() {
    let (mut session, rx) = new_session();

    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Starting);
    session.handle_event(RecognizerEvent::Started);
    assert_eq!(session.state(), SessionState::Listening);

    let events = drain(&rx);
    assert_eq!(statuses(&events), vec!["Starting", "Listening"]);
    assert_eq!(ephemerals(&events), vec!["Listening"]);
}

#[test]
fn test_error_restarts_after_delay() {
    let (mut session, rx) = listening_session();
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::error("no-speech"), t0);
    assert_eq!(session.state(), SessionState::RestartPending);
    assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(100)));
    assert_eq!(statuses(&drain(&rx)), vec!["Error: no-speech"]);
    assert_eq!(session.last_error(), Some("no-speech"));

    session.poll_at(t0 + Duration::from_millis(99));
    assert_eq!(session.state(), SessionState::RestartPending);
    assert_eq!(session.recognizer().starts, 1);

    session.poll_at(t0 + Duration::from_millis(100));
    assert_eq!(session.state(), SessionState::Starting);
    assert_eq!(session.recognizer().starts, 2);
    assert_eq!(session.next_deadline(), None);

    session.handle_event(RecognizerEvent::Started);
    assert_eq!(session.state(), SessionState::Listening);
    assert_eq!(statuses(&drain(&rx)), vec!["Starting", "Listening"]);
}

#[test]
fn test_aborted_error_stops_without_restart() {
    let (mut session, rx) = listening_session();
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::error("aborted"), t0);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(statuses(&drain(&rx)), vec!["Stopped"]);

    session.poll_at(t0 + Duration::from_secs(1));
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.recognizer().starts, 1);
}

#[test]
fn test_error_before_started_stops_without_restart() {
    let (mut session, rx) = new_session();
    session.start().unwrap();
    let _ = drain(&rx);
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::error("not-allowed"), t0);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(session.last_error(), Some("not-allowed"));
    assert_eq!(statuses(&drain(&rx)), vec!["Error: not-allowed", "Stopped"]);

    // The trailing end signal and later polls change nothing
    session.handle_event_at(RecognizerEvent::Ended, t0);
    for step in 1..=5 {
        session.poll_at(t0 + Duration::from_millis(100 * step));
    }
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.recognizer().starts, 1);
    assert!(drain(&rx).is_empty());
}

#[test]
fn test_end_before_started_stops_without_restart() {
    let (mut session, rx) = new_session();
    session.start().unwrap();
    let _ = drain(&rx);
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::Ended, t0);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(statuses(&drain(&rx)), vec!["Stopped"]);

    session.poll_at(t0 + Duration::from_secs(1));
    assert_eq!(session.recognizer().starts, 1);

    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Starting);
}

#[test]
fn test_end_restarts_faster_than_error() {
    let (mut session, rx) = listening_session();
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::Ended, t0);
    assert_eq!(session.state(), SessionState::RestartPending);
    assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(10)));
    assert_eq!(statuses(&drain(&rx)), vec!["Restarting"]);

    session.poll_at(t0 + Duration::from_millis(10));
    assert_eq!(session.state(), SessionState::Starting);
    assert_eq!(session.recognizer().starts, 2);
}

#[test]
fn test_end_after_error_keeps_single_restart() {
    let (mut session, _rx) = listening_session();
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::error("network"), t0);
    session.handle_event_at(RecognizerEvent::Ended, t0);
    assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(100)));

    session.poll_at(t0 + Duration::from_millis(100));
    session.poll_at(t0 + Duration::from_millis(200));
    assert_eq!(session.recognizer().starts, 2);
}

#[test]
fn test_stop_during_restart_delay_stays_stopped() {
    let (mut session, rx) = listening_session();
    let t0 = Instant::now();

    session.handle_event_at(RecognizerEvent::error("no-speech"), t0);
    session.stop();
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(session.recognizer().stops, 1);

    session.poll_at(t0 + Duration::from_secs(5));
    session.handle_event(RecognizerEvent::Started);
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.recognizer().starts, 1);

    let events = drain(&rx);
    assert_eq!(statuses(&events), vec!["Error: no-speech", "Stopped"]);
    assert_eq!(ephemerals(&events), vec!["Voice Control Stopped"]);
}

#[test]
fn test_failed_restart_enters_failed_until_started_again() {
    let (mut session, rx) = listening_session();
    let t0 = Instant::now();

    session.recognizer_mut().fail_start = true;
    session.handle_event_at(RecognizerEvent::error("audio-capture"), t0);
    session.poll_at(t0 + Duration::from_millis(100));

    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(statuses(&drain(&rx)), vec!["Error: audio-capture", "Stopped (Error)"]);

    // No automatic retry
    session.poll_at(t0 + Duration::from_secs(10));
    assert_eq!(session.state(), SessionState::Failed);

    session.recognizer_mut().fail_start = false;
    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Starting);
}

#[test]
fn test_stop_then_start_reenters_starting() {
    let (mut session, _rx) = listening_session();

    session.stop();
    session.stop();
    assert_eq!(session.recognizer().stops, 1);

    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Starting);
    assert_eq!(session.recognizer().starts, 2);
}

#[test]
fn test_queued_events_are_drained_by_poll() {
    let (mut session, _rx) = new_session();
    let events = session.event_sender();
    session.start().unwrap();

    events.send(RecognizerEvent::Started).unwrap();
    assert_eq!(session.state(), SessionState::Starting);

    let t0 = Instant::now();
    session.poll_at(t0);
    assert_eq!(session.state(), SessionState::Listening);

    events.send(RecognizerEvent::Ended).unwrap();
    session.poll_at(t0);
    assert_eq!(session.state(), SessionState::RestartPending);
    session.poll_at(t0 + Duration::from_millis(10));
    assert_eq!(session.state(), SessionState::Starting);
}

#[test]
fn test_results_ignored_unless_listening() {
    let (mut session, rx) = new_session();
    session.start().unwrap();
    let _ = drain(&rx);

    session.handle_event(RecognizerEvent::Result(vec![Hypothesis::final_result(
        "left", 0.9,
    )]));
    assert!(session.history().is_empty());
    assert!(drain(&rx).is_empty());
}
