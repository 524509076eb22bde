//! Phrases command implementation

use anyhow::Result;
use std::path::Path;

use voicedrive::config::Config;

/// Print the active phrase dictionary in priority order
pub fn phrases_command(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let dictionary = config.phrase_dictionary()?;

    if json {
        let entries: Vec<_> = dictionary
            .all_commands()
            .into_iter()
            .map(|command| {
                serde_json::json!({
                    "command": command,
                    "phrases": dictionary.phrases_for(command),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for command in dictionary.all_commands() {
        println!("{}:", command);
        for phrase in dictionary.phrases(command) {
            if phrase.is_single_word() {
                println!("  - {}", phrase);
            } else {
                println!("  - {} (anywhere)", phrase);
            }
        }
    }

    Ok(())
}
