//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use voicedrive::config::Config;

/// Default configuration content for voicedrive init
pub const DEFAULT_CONFIG: &str = r#"# voicedrive configuration
# ========================

# ============================================================================
# VOICE - Recognition session settings
# ============================================================================
#
# Available options:
#   confidence_threshold          - Minimum confidence for final results (default: 0.3)
#                                   Interim results need 70% of this value
#   restart_delay_after_error_ms  - Restart delay after a recognizer error (default: 100)
#   restart_delay_after_end_ms    - Restart delay after the stream ends (default: 10)
#   ephemeral_display_ms          - How long acknowledgments are shown (default: 300)
#   max_alternatives              - Alternatives requested per result (default: 3)
#   language                      - Recognition language tag (default: "en-US")

[voice]
confidence_threshold = 0.3
restart_delay_after_error_ms = 100
restart_delay_after_end_ms = 10
ephemeral_display_ms = 300
max_alternatives = 3
language = "en-US"

# ============================================================================
# PHRASES - Trigger phrase overrides
# ============================================================================
#
# Commands (in priority order): left, right, accelerate, brake, turnback
# Listing a command replaces its built-in phrases. Earlier phrases win.
# Single words only match whole words; multi-word phrases match anywhere.
#
# [phrases]
# left = ["left", "steer left", "port"]
"#;

/// Write the default configuration file
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
