//! Error types for voice recognition and dispatch

use crate::Command;

use super::types::SessionState;

/// Error reported by a `Recognizer` implementation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RecognizerError(pub String);

impl RecognizerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error type for phrase dictionary construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("Command '{0}' has no trigger phrases")]
    NoPhrases(Command),

    #[error("Invalid phrase for command '{command}': {reason}")]
    InvalidPhrase { command: Command, reason: String },
}

/// Error type for recognition session operations
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("Speech recognition is not supported in this environment")]
    UnsupportedEnvironment,

    #[error("Recognition session is already active ({0})")]
    AlreadyActive(SessionState),

    #[error("Failed to start recognition: {0}")]
    StartFailed(#[source] RecognizerError),
}
