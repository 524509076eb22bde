//! TranscriptMatcher - finds the command a transcript asks for

use std::sync::Arc;

use tracing::debug;

use crate::{MatchResult, normalize_transcript};

use super::dictionary::PhraseDictionary;

/// Matches transcripts against a shared phrase dictionary
#[derive(Debug, Clone)]
pub struct TranscriptMatcher {
    dictionary: Arc<PhraseDictionary>,
}

impl Default for TranscriptMatcher {
    fn default() -> Self {
        Self::new(Arc::new(PhraseDictionary::default()))
    }
}

impl TranscriptMatcher {
    pub fn new(dictionary: Arc<PhraseDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &PhraseDictionary {
        &self.dictionary
    }

    /// Match a transcript against the dictionary.
    ///
    /// Commands and phrases are tried in declared order; the first phrase
    /// found at least once wins and its occurrences are counted. Only one
    /// command is reported even if the transcript mentions several.
    pub fn match_text(&self, transcript: &str) -> Option<MatchResult> {
        let transcript = normalize_transcript(transcript);
        if transcript.is_empty() {
            return None;
        }

        for (command, phrases) in self.dictionary.entries() {
            for phrase in phrases {
                let count = phrase.count_in(&transcript);
                if count > 0 {
                    debug!("Found \"{}\" {} times in \"{}\"", phrase, count, transcript);
                    return Some(MatchResult {
                        command,
                        repeat_count: count,
                    });
                }
            }
        }

        None
    }
}
