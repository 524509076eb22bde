use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "voicedrive")]
#[command(about = "Voice commands for steering a game actor")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.voicedrive/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List trigger phrases per command, in priority order
    Phrases {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match a transcript and show the command it would trigger
    Match {
        /// The transcript to match
        #[arg(required = true)]
        transcript: Vec<String>,
    },

    /// Drive a recognition session from a scripted recognizer
    Simulate {
        /// Script file (defaults to stdin)
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Phrases { json } => {
            cli::phrases::phrases_command(cli.config.as_deref(), json)?;
        }
        Commands::Match { transcript } => {
            cli::matching::match_command(cli.config.as_deref(), &transcript.join(" "))?;
        }
        Commands::Simulate { script } => {
            cli::simulate::simulate_command(cli.config.as_deref(), script.as_deref()).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force)?;
        }
    }

    Ok(())
}
