//! Match command implementation

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use voicedrive::config::Config;
use voicedrive::voice::TranscriptMatcher;

/// Show which command a transcript triggers
pub fn match_command(config_path: Option<&Path>, transcript: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    let matcher = TranscriptMatcher::new(Arc::new(config.phrase_dictionary()?));

    match matcher.match_text(transcript) {
        Some(result) => println!("{}", result),
        None => println!("No command matched."),
    }

    Ok(())
}
