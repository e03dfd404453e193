//! Configuration management.

mod settings;

pub use settings::{
    AnalysisSettings, AppConfig, AppSettings, KrakenConfig, LogFormat, LoggingConfig,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::time::Duration;
use ta_core::error::TaError;
use ta_core::types::AssetPair;
use thiserror::Error;

/// Prefix of environment overrides, e.g. `KRAKEN_TA__KRAKEN__TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "KRAKEN_TA";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

impl From<SettingsError> for TaError {
    fn from(e: SettingsError) -> Self {
        TaError::Config(e.to_string())
    }
}

/// Load configuration from file and environment. The file must exist.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    load(path, true)
}

/// Like [`load_config`], but a missing file yields the defaults
/// (environment overrides still apply).
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, SettingsError> {
    load(path, false)
}

fn load(path: &Path, required: bool) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Reject settings the application cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.default_pair()?;
        if self.kraken.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "kraken.timeout_secs must be positive".to_string(),
            ));
        }
        if self.kraken.base_url.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "kraken.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed `analysis.default_pair`.
    pub fn default_pair(&self) -> Result<AssetPair, SettingsError> {
        self.analysis.default_pair.parse().map_err(|_| {
            SettingsError::Invalid(format!(
                "unknown analysis.default_pair: {}",
                self.analysis.default_pair
            ))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.kraken.timeout_secs)
    }

    /// Resolved configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use ta_core::types::Interval;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.kraken.base_url, "https://api.kraken.com");
        assert_eq!(config.kraken.timeout_secs, 10);
        assert_eq!(config.analysis.interval, Interval::Hour1);
        assert_eq!(config.analysis.preview_rows, 200);
        assert_eq!(config.default_pair().unwrap(), AssetPair::BtcUsd);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
            [logging]
            format = "json"

            [analysis]
            default_pair = "eth/usd"
            interval = "4h"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.analysis.interval, Interval::Hour4);
        assert_eq!(config.default_pair().unwrap(), AssetPair::EthUsd);
        assert_eq!(config.kraken.timeout_secs, 10);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/kraken-ta.toml");
        assert!(matches!(load_config(path), Err(SettingsError::Load(_))));
        assert!(load_config_or_default(path).is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.analysis.default_pair = "DOGE/EUR".to_string();
        assert!(matches!(config.validate(), Err(SettingsError::Invalid(_))));

        let mut config = AppConfig::default();
        config.kraken.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.kraken.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let file = write_config("[kraken]\ntimeout_secs = 0\n");
        assert!(matches!(
            load_config(file.path()),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_render_round_trips_through_toml() {
        let config = AppConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[kraken]"));

        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_into_ta_error() {
        let err: TaError = SettingsError::Invalid("x".to_string()).into();
        assert!(matches!(err, TaError::Config(_)));
    }
}
