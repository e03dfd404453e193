//! Kraken technical-analysis CLI.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use ta_config::{load_config_or_default, LogFormat};
use ta_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging settings come from the config file when it loads; flags win
    let loaded = load_config_or_default(&cli.config);
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();

    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or(logging.level);
    let json = cli.json_logs || logging.format == LogFormat::Json;
    let _guard = setup_logging(&log_level, json, logging.file.as_deref().map(Path::new));

    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, loaded?).await,
        Commands::Pairs => cli::commands::pairs::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
