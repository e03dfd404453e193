//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use ta_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Kraken API: {}", config.kraken.base_url);
            println!("Request timeout: {}s", config.kraken.timeout_secs);
            println!("Default pair: {}", config.analysis.default_pair);
            println!("Interval: {}", config.analysis.interval);
            println!();
            println!("Resolved configuration:");
            println!("{}", config.to_toml()?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
