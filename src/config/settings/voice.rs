//! Voice recognition settings

use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::voice::SessionConfig;

/// Voice recognition settings (`[voice]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Minimum confidence for final results (0.0-1.0).
    /// Interim results are accepted at 70% of this value.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Delay before restarting after a recognizer error (ms)
    #[serde(default = "default_restart_delay_after_error_ms")]
    pub restart_delay_after_error_ms: u64,

    /// Delay before restarting after the recognizer stream ends (ms)
    #[serde(default = "default_restart_delay_after_end_ms")]
    pub restart_delay_after_end_ms: u64,

    /// How long command acknowledgments stay visible (ms)
    #[serde(default = "default_ephemeral_display_ms")]
    pub ephemeral_display_ms: u64,

    /// Alternatives requested per recognizer result
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,

    /// Recognition language tag (en-US, de-DE, etc.)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_confidence_threshold() -> f32 {
    0.3 // low on purpose, noisy microphones rarely score higher
}

fn default_restart_delay_after_error_ms() -> u64 {
    100
}

fn default_restart_delay_after_end_ms() -> u64 {
    10
}

fn default_ephemeral_display_ms() -> u64 {
    300
}

fn default_max_alternatives() -> u32 {
    3
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            restart_delay_after_error_ms: default_restart_delay_after_error_ms(),
            restart_delay_after_end_ms: default_restart_delay_after_end_ms(),
            ephemeral_display_ms: default_ephemeral_display_ms(),
            max_alternatives: default_max_alternatives(),
            language: default_language(),
        }
    }
}

impl VoiceSettings {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            bail!(
                "voice.confidence_threshold must be between 0 and 1, got {}",
                self.confidence_threshold
            );
        }
        if self.max_alternatives == 0 {
            bail!("voice.max_alternatives must be at least 1");
        }
        if self.language.trim().is_empty() {
            bail!("voice.language must not be empty");
        }
        Ok(())
    }

    /// Runtime session configuration
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            confidence_threshold: self.confidence_threshold,
            restart_delay_after_error: Duration::from_millis(self.restart_delay_after_error_ms),
            restart_delay_after_end: Duration::from_millis(self.restart_delay_after_end_ms),
            ephemeral_display: Duration::from_millis(self.ephemeral_display_ms),
            max_alternatives: self.max_alternatives,
            language: self.language.trim().to_string(),
        }
    }
}
