//! PhraseDictionary - static mapping from commands to trigger phrases
//!
//! The declared order of commands and of phrases within a command is the
//! matching priority order.

use std::collections::HashMap;

use crate::Command;
use crate::voice::error::DictionaryError;

use super::phrase::Phrase;

/// Built-in trigger phrases, in priority order
const DEFAULT_PHRASES: [(Command, &[&str]); 5] = [
    (
        Command::Left,
        &["left", "steer left", "turn left", "go left", "move left"],
    ),
    (
        Command::Right,
        &["right", "steer right", "turn right", "go right", "move right"],
    ),
    (
        Command::Accelerate,
        &[
            "accelerate",
            "speed up",
            "faster",
            "forward",
            "speed",
            "go",
            "move",
            "gas",
            "power",
        ],
    ),
    (
        Command::Brake,
        &[
            "brake",
            "slow",
            "slow down",
            "stop",
            "halt",
            "break",
            "decelerate",
        ],
    ),
    (
        Command::Turnback,
        &[
            "turn back",
            "turn around",
            "reverse",
            "about face",
            "one eighty",
            "u turn",
        ],
    ),
];

/// Read-only dictionary of trigger phrases
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    entries: Vec<(Command, Vec<Phrase>)>,
}

impl PhraseDictionary {
    /// Build a dictionary from entries in priority order.
    ///
    /// Every command must be present with at least one phrase. Duplicate
    /// phrases within a command are dropped, keeping the first occurrence.
    pub fn new<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (Command, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut built: Vec<(Command, Vec<Phrase>)> = Vec::new();

        for (command, texts) in entries {
            let mut phrases: Vec<Phrase> = Vec::with_capacity(texts.len());
            for text in &texts {
                let phrase = Phrase::new(command, text.as_ref())?;
                if !phrases.contains(&phrase) {
                    phrases.push(phrase);
                }
            }

            if phrases.is_empty() {
                return Err(DictionaryError::NoPhrases(command));
            }

            match built.iter_mut().find(|(existing, _)| *existing == command) {
                Some((_, existing)) => {
                    for phrase in phrases {
                        if !existing.contains(&phrase) {
                            existing.push(phrase);
                        }
                    }
                }
                None => built.push((command, phrases)),
            }
        }

        if let Some(missing) = Command::ALL
            .iter()
            .find(|command| !built.iter().any(|(c, _)| c == *command))
        {
            return Err(DictionaryError::NoPhrases(*missing));
        }

        Ok(Self { entries: built })
    }

    /// Built-in dictionary with per-command phrase lists replaced by `overrides`
    pub fn with_overrides(
        overrides: &HashMap<Command, Vec<String>>,
    ) -> Result<Self, DictionaryError> {
        Self::new(DEFAULT_PHRASES.iter().map(|(command, defaults)| {
            let phrases: Vec<String> = match overrides.get(command) {
                Some(custom) => custom.clone(),
                None => defaults.iter().map(|s| s.to_string()).collect(),
            };
            (*command, phrases)
        }))
    }

    /// Trigger phrases for a command, in priority order
    pub fn phrases_for(&self, command: Command) -> Vec<&str> {
        self.phrases(command).iter().map(Phrase::as_str).collect()
    }

    /// Compiled phrases for a command, in priority order
    pub fn phrases(&self, command: Command) -> &[Phrase] {
        self.entries
            .iter()
            .find(|(c, _)| *c == command)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or_default()
    }

    /// All commands in priority order
    pub fn all_commands(&self) -> Vec<Command> {
        self.entries.iter().map(|(command, _)| *command).collect()
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (Command, &[Phrase])> {
        self.entries
            .iter()
            .map(|(command, phrases)| (*command, phrases.as_slice()))
    }
}

impl Default for PhraseDictionary {
    fn default() -> Self {
        let entries = DEFAULT_PHRASES
            .iter()
            .map(|(command, phrases)| {
                let phrases = phrases
                    .iter()
                    .filter_map(|text| Phrase::new(*command, text).ok())
                    .collect();
                (*command, phrases)
            })
            .collect();
        Self { entries }
    }
}
