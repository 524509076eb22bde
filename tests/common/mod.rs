//! Shared test utilities for recognition session tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use voicedrive::voice::{
    Actor, RecognitionSession, Recognizer, RecognizerConfig, RecognizerError, RecognizerEvent,
    SessionConfig, SessionState, StatusEvent, TranscriptMatcher,
};

/// Actor that records every call in order
#[derive(Debug, Default)]
pub struct RecordingActor {
    pub calls: Vec<&'static str>,
}

impl Actor for RecordingActor {
    fn steer_left(&mut self) {
        self.calls.push("steer_left");
    }
    fn steer_right(&mut self) {
        self.calls.push("steer_right");
    }
    fn accelerate(&mut self) {
        self.calls.push("accelerate");
    }
    fn brake(&mut self) {
        self.calls.push("brake");
    }
    fn turn_back(&mut self) {
        self.calls.push("turn_back");
    }
}

/// Recognizer that counts requests and can be told to fail
#[derive(Debug, Default)]
pub struct FakeRecognizer {
    pub starts: usize,
    pub stops: usize,
    pub fail_start: bool,
}

impl Recognizer for FakeRecognizer {
    fn start(&mut self, _config: &RecognizerConfig) -> Result<(), RecognizerError> {
        if self.fail_start {
            return Err(RecognizerError::new("not-allowed"));
        }
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecognizerError> {
        self.stops += 1;
        Ok(())
    }
}

pub type TestSession = RecognitionSession<FakeRecognizer>;

/// Create a session with default config and a channel status sink
pub fn new_session() -> (TestSession, Receiver<StatusEvent>) {
    new_session_with(SessionConfig::default())
}

pub fn new_session_with(config: SessionConfig) -> (TestSession, Receiver<StatusEvent>) {
    let (tx, rx) = mpsc::channel();
    let session = RecognitionSession::new(
        FakeRecognizer::default(),
        config,
        TranscriptMatcher::default(),
        tx,
    )
    .expect("fake recognizer is supported");
    (session, rx)
}

/// Start a session and bring it to Listening, discarding emitted events
pub fn listening_session() -> (TestSession, Receiver<StatusEvent>) {
    let (mut session, rx) = new_session();
    session.start().expect("start succeeds");
    session.handle_event(RecognizerEvent::Started);
    assert_eq!(session.state(), SessionState::Listening);
    let _ = drain(&rx);
    (session, rx)
}

/// Bind a fresh recording actor
pub fn bind_recording_actor(session: &mut TestSession) -> Rc<RefCell<RecordingActor>> {
    let actor = Rc::new(RefCell::new(RecordingActor::default()));
    session.bind_actor(&actor);
    actor
}

pub fn drain(rx: &Receiver<StatusEvent>) -> Vec<StatusEvent> {
    rx.try_iter().collect()
}

pub fn statuses(events: &[StatusEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            StatusEvent::StatusChanged(text) => Some(text.clone()),
            StatusEvent::Ephemeral { .. } => None,
        })
        .collect()
}

pub fn ephemerals(events: &[StatusEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            StatusEvent::Ephemeral { text, .. } => Some(text.clone()),
            StatusEvent::StatusChanged(_) => None,
        })
        .collect()
}
