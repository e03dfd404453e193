//! Configuration structures.

use serde::{Deserialize, Serialize};
use ta_core::types::Interval;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub kraken: KrakenConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "kraken-ta".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Daily rolling log file; stdout only when unset
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

/// Kraken public API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KrakenConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for KrakenConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.kraken.com".to_string(),
            timeout_secs: 10,
            user_agent: concat!("kraken-ta/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Defaults of the `analyze` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub default_pair: String,
    pub interval: Interval,
    pub preview_rows: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_pair: "BTC/USD".to_string(),
            interval: Interval::Hour1,
            preview_rows: 200,
        }
    }
}
