//! Suppresses repeated interim transcripts.
//!
//! Streaming recognizers re-emit the same partial transcript many times
//! before finalizing it. Once an interim transcript has triggered a command,
//! identical interim repeats are rejected until the transcript changes, an
//! interim pass produces no match, or a final result arrives.

use crate::Hypothesis;

#[derive(Debug, Default, Clone)]
pub struct DedupFilter {
    last_interim: Option<String>,
}

impl DedupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a hypothesis should proceed to matching.
    ///
    /// Final hypotheses are always admitted and clear the stored transcript.
    pub fn admit(&mut self, hypothesis: &Hypothesis) -> bool {
        if hypothesis.is_final {
            self.last_interim = None;
            return true;
        }
        self.last_interim.as_deref() != Some(hypothesis.normalized_transcript().as_str())
    }

    /// Record that an admitted hypothesis triggered a command
    pub fn record_match(&mut self, hypothesis: &Hypothesis) {
        self.last_interim = if hypothesis.is_final {
            None
        } else {
            Some(hypothesis.normalized_transcript())
        };
    }

    /// Forget the stored transcript
    pub fn clear(&mut self) {
        self.last_interim = None;
    }

    pub fn last_interim(&self) -> Option<&str> {
        self.last_interim.as_deref()
    }
}
