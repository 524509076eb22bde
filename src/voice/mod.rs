//! Voice command module
//!
//! This module provides:
//! 1. Phrase matching: transcripts -> (command, repeat count)
//! 2. Interim deduplication so a partial utterance fires only once
//! 3. A recognition session that restarts the recognizer on transient failures
//! 4. Dispatch of matched commands to the game actor
//!
//! Architecture:
//! - PhraseDictionary: Static command -> trigger phrase mapping
//! - TranscriptMatcher: First-match phrase search with repeat counting
//! - DedupFilter: Suppresses repeated interim transcripts
//! - RecognitionSession: Recognizer lifecycle state machine
//! - CommandDispatcher: Applies commands to the bound Actor
//!
//! The recognizer, actor and status display are collaborators behind the
//! traits in `ports`.

pub mod actions;
mod dedup;
mod dispatcher;
mod error;
mod history;
mod ports;
mod session;
mod types;


// Re-export from actions
pub use actions::{Phrase, PhraseDictionary, TranscriptMatcher};

pub use dedup::DedupFilter;
pub use dispatcher::CommandDispatcher;
pub use error::{DictionaryError, RecognizerError, VoiceError};
pub use history::{CommandHistory, HistoryEntry};
pub use ports::{Actor, Recognizer, StatusSink};
pub use session::RecognitionSession;
pub use types::{
    ABORTED_REASON, RecognizerConfig, RecognizerEvent, SessionConfig, SessionState, StatusEvent,
};
