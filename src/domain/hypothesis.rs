//! Recognizer hypotheses and match results

use serde::{Deserialize, Serialize};

use super::Command;

/// One recognizer-proposed transcription of a spoken span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Raw transcript as delivered by the recognizer
    pub transcript: String,
    /// Recognizer confidence in [0, 1]
    pub confidence: f32,
    /// Whether the recognizer will revise this hypothesis further
    pub is_final: bool,
    /// Position among the alternatives of its batch (0 = most likely)
    #[serde(default)]
    pub alternative_rank: u32,
}

impl Hypothesis {
    /// Create a final hypothesis with rank 0
    pub fn final_result(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: true,
            alternative_rank: 0,
        }
    }

    /// Create an interim hypothesis with rank 0
    pub fn interim(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: false,
            alternative_rank: 0,
        }
    }

    /// Set the alternative rank
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.alternative_rank = rank;
        self
    }

    /// Transcript trimmed and lowercased for matching
    pub fn normalized_transcript(&self) -> String {
        normalize_transcript(&self.transcript)
    }
}

/// Trim and lowercase a transcript. No stemming is applied.
pub fn normalize_transcript(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}

/// Result of matching a transcript against the phrase dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub command: Command,
    /// Number of non-overlapping occurrences of the matched phrase (always >= 1)
    pub repeat_count: usize,
}

impl MatchResult {
    /// Label shown to the player, e.g. `left` or `left ×3`
    pub fn label(&self) -> String {
        if self.repeat_count > 1 {
            format!("{} ×{}", self.command, self.repeat_count)
        } else {
            self.command.to_string()
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ×{}", self.command, self.repeat_count)
    }
}
