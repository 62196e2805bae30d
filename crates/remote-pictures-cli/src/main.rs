mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "remote-pictures")]
#[command(about = "Mirror remote picture collections and generate re-export modules")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download missing assets and regenerate the collection modules
    Sync {
        /// Re-download every asset, ignoring the local mirror
        #[arg(long)]
        force: bool,
    },
    /// Show what a sync would do without touching the network
    Plan,
}

/// The readiness banner is decorative and only wanted during local
/// development. Read once here and passed into the run context.
fn development_mode() -> bool {
    std::env::var("MODE").is_ok_and(|v| v == "development")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let file_config = config::load_config(&cli.config)?;

    match cli.command {
        Command::Sync { force } => {
            commands::sync::run(file_config, force, development_mode()).await
        }
        Command::Plan => commands::plan::run(file_config),
    }
}
