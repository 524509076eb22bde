//! Voice Actions - Mapping trigger phrases to game commands
//!
//! This module defines how spoken phrases select a command and how many
//! times it should be applied.
//!
//! Example phrases:
//! - "left" -> steer left once
//! - "left left left" -> steer left three times
//! - "turn around" -> turn back

mod dictionary;
mod matcher;
mod phrase;

pub use dictionary::PhraseDictionary;
pub use matcher::TranscriptMatcher;
pub use phrase::Phrase;

#[cfg(test)]
mod tests;
