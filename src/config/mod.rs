//! Configuration loading and management

mod io;
mod settings;

pub use settings::VoiceSettings;

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::Command;
use crate::voice::PhraseDictionary;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recognition settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Per-command trigger phrase overrides, keyed by command name.
    /// Commands not listed keep their built-in phrases.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub phrases: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate settings and phrase overrides
    pub fn validate(&self) -> Result<()> {
        self.voice.validate()?;
        self.phrase_dictionary()?;
        Ok(())
    }

    /// Phrase overrides keyed by command
    pub fn phrase_overrides(&self) -> Result<HashMap<Command, Vec<String>>> {
        self.phrases
            .iter()
            .map(|(name, phrases)| {
                let command = Command::from_name(name)
                    .ok_or_else(|| anyhow!("Unknown command in [phrases]: {}", name))?;
                Ok((command, phrases.clone()))
            })
            .collect()
    }

    /// Build the phrase dictionary: built-in phrases plus overrides
    pub fn phrase_dictionary(&self) -> Result<PhraseDictionary> {
        let overrides = self.phrase_overrides()?;
        PhraseDictionary::with_overrides(&overrides).context("Invalid [phrases] configuration")
    }
}
