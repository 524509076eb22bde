//! Trigger phrase and occurrence counting
//!
//! Single-word phrases only count when they stand as whole words ("go" does
//! not fire inside "mango"). Multi-word phrases are counted as literal,
//! non-overlapping substrings.

use regex::Regex;

use crate::Command;
use crate::voice::error::DictionaryError;

/// A trigger phrase with its compiled matching rule
#[derive(Debug, Clone)]
pub struct Phrase {
    text: String,
    pattern: PhrasePattern,
}

#[derive(Debug, Clone)]
enum PhrasePattern {
    Word(Regex),
    Literal,
}

impl Phrase {
    /// Build a phrase for `command`. The text is trimmed and lowercased.
    pub fn new(command: Command, text: &str) -> Result<Self, DictionaryError> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return Err(DictionaryError::InvalidPhrase {
                command,
                reason: "phrase is empty".to_string(),
            });
        }

        let pattern = if text.contains(' ') {
            PhrasePattern::Literal
        } else {
            let regex = Regex::new(&format!(r"\b{}\b", regex::escape(&text))).map_err(|e| {
                DictionaryError::InvalidPhrase {
                    command,
                    reason: e.to_string(),
                }
            })?;
            PhrasePattern::Word(regex)
        };

        Ok(Self { text, pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the phrase is matched with word-boundary semantics
    pub fn is_single_word(&self) -> bool {
        matches!(self.pattern, PhrasePattern::Word(_))
    }

    /// Count non-overlapping occurrences in an already normalized transcript
    pub fn count_in(&self, transcript: &str) -> usize {
        // Cheap pre-check before running the regex
        if !transcript.contains(self.text.as_str()) {
            return 0;
        }
        match &self.pattern {
            PhrasePattern::Word(regex) => regex.find_iter(transcript).count(),
            PhrasePattern::Literal => transcript.matches(self.text.as_str()).count(),
        }
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Phrase {}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
