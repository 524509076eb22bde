//! Voice session types and configuration.

use std::time::Duration;

use crate::Hypothesis;

/// Error reason the recognizer reports for a user-initiated abort
pub const ABORTED_REASON: &str = "aborted";

/// Recognition session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Never started
    #[default]
    Idle,
    /// A recognizer stream was requested, waiting for `started`
    Starting,
    /// Stream is live and results are being matched
    Listening,
    /// Stream closed or failed, a restart is scheduled
    RestartPending,
    /// Halted on request (or by an `aborted` error)
    Stopped,
    /// A restart attempt itself failed
    Failed,
}

impl SessionState {
    /// Returns true while the session intends to keep listening
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SessionState::Starting | SessionState::Listening | SessionState::RestartPending
        )
    }

    /// Returns true if results are currently being matched
    pub fn is_listening(&self) -> bool {
        matches!(self, SessionState::Listening)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Starting => write!(f, "Starting"),
            SessionState::Listening => write!(f, "Listening"),
            SessionState::RestartPending => write!(f, "RestartPending"),
            SessionState::Stopped => write!(f, "Stopped"),
            SessionState::Failed => write!(f, "Failed"),
        }
    }
}

/// Runtime configuration for a recognition session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Minimum confidence for final results; interim results use 0.7× this
    pub confidence_threshold: f32,
    pub restart_delay_after_error: Duration,
    pub restart_delay_after_end: Duration,
    /// How long command acknowledgments stay on screen
    pub ephemeral_display: Duration,
    pub max_alternatives: u32,
    /// BCP 47 language tag passed to the recognizer
    pub language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            restart_delay_after_error: Duration::from_millis(100),
            restart_delay_after_end: Duration::from_millis(10),
            ephemeral_display: Duration::from_millis(300),
            max_alternatives: 3,
            language: "en-US".to_string(),
        }
    }
}

impl SessionConfig {
    /// Factor applied to the threshold for interim results
    pub const INTERIM_FACTOR: f32 = 0.7;

    /// Confidence a hypothesis needs to be considered at all
    pub fn required_confidence(&self, is_final: bool) -> f32 {
        if is_final {
            self.confidence_threshold
        } else {
            self.confidence_threshold * Self::INTERIM_FACTOR
        }
    }

    /// Recognizer configuration derived from this session config
    pub fn recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig {
            continuous: true,
            interim_results: true,
            max_alternatives: self.max_alternatives,
            language: self.language.clone(),
        }
    }
}

/// Configuration handed to the recognizer on every `start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    pub continuous: bool,
    pub interim_results: bool,
    pub max_alternatives: u32,
    pub language: String,
}

/// Signals from the recognizer to the session
#[derive(Debug, Clone, PartialEq)]
pub enum RecognizerEvent {
    /// Stream is live
    Started,
    /// Latest result batch: alternatives for the same spoken span
    Result(Vec<Hypothesis>),
    /// Stream failed
    Error { reason: String },
    /// Stream closed (e.g. provider-side timeout)
    Ended,
}

impl RecognizerEvent {
    pub fn error(reason: impl Into<String>) -> Self {
        RecognizerEvent::Error {
            reason: reason.into(),
        }
    }
}

/// Events emitted to a channel-backed status sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    StatusChanged(String),
    Ephemeral { text: String, duration: Duration },
}
