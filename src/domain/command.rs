//! Command type definitions for voice steering

use serde::{Deserialize, Serialize};

/// A discrete game action that can be triggered by voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Steer the actor to the left
    Left,
    /// Steer the actor to the right
    Right,
    /// Increase speed
    Accelerate,
    /// Decrease speed
    Brake,
    /// Reverse heading
    #[serde(alias = "turn_back")]
    Turnback,
}

impl Command {
    /// All commands in priority order (earlier commands win ambiguous transcripts)
    pub const ALL: [Command; 5] = [
        Command::Left,
        Command::Right,
        Command::Accelerate,
        Command::Brake,
        Command::Turnback,
    ];

    /// Parse a command from its name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "accelerate" => Some(Command::Accelerate),
            "brake" => Some(Command::Brake),
            "turnback" | "turn_back" => Some(Command::Turnback),
            _ => None,
        }
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Accelerate => "accelerate",
            Command::Brake => "brake",
            Command::Turnback => "turnback",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
