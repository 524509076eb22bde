//! Collaborator interfaces consumed and exposed by the voice core.

use std::sync::mpsc::Sender;
use std::time::Duration;

use super::error::RecognizerError;
use super::types::{RecognizerConfig, StatusEvent};

/// Streaming speech recognizer.
///
/// Lifecycle signals (`started`, `result`, `error`, `ended`) are delivered back
/// to the session as [`RecognizerEvent`](super::RecognizerEvent)s, either
/// directly or through the session's event sender.
pub trait Recognizer {
    /// Whether the recognition capability exists at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Request a new recognition stream
    fn start(&mut self, config: &RecognizerConfig) -> Result<(), RecognizerError>;

    /// Request shutdown of the current stream
    fn stop(&mut self) -> Result<(), RecognizerError>;
}

/// The controllable game entity commands are applied to
pub trait Actor {
    fn steer_left(&mut self);
    fn steer_right(&mut self);
    fn accelerate(&mut self);
    fn brake(&mut self);
    fn turn_back(&mut self);
}

/// Outward UI signal. The caller is responsible for any rendering.
pub trait StatusSink {
    fn on_status_changed(&mut self, text: &str);
    fn on_ephemeral_message(&mut self, text: &str, duration: Duration);
}

impl StatusSink for Sender<StatusEvent> {
    fn on_status_changed(&mut self, text: &str) {
        let _ = self.send(StatusEvent::StatusChanged(text.to_string()));
    }

    fn on_ephemeral_message(&mut self, text: &str, duration: Duration) {
        let _ = self.send(StatusEvent::Ephemeral {
            text: text.to_string(),
            duration,
        });
    }
}
