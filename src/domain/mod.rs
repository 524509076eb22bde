//! Core domain types for voicedrive

mod command;
mod hypothesis;

pub use command::Command;
pub use hypothesis::{Hypothesis, MatchResult, normalize_transcript};
