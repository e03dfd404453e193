//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ta_core::types::{AssetPair, Interval};

#[derive(Parser)]
#[command(name = "kraken-ta")]
#[command(author, version, about = "Technical indicators and signals for Kraken OHLC series")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to logging.level from the config)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators and signals for one pair
    Analyze(AnalyzeArgs),
    /// List supported pairs
    Pairs,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Pair to analyze, e.g. BTC/USD or XXBTZUSD (defaults to analysis.default_pair)
    #[arg(short, long)]
    pub pair: Option<AssetPair>,

    /// Bar interval: 1m, 5m, 15m, 30m, 1h, 4h, 1d, 1w, 15d
    #[arg(short, long)]
    pub interval: Option<Interval>,

    /// Read rows from a saved Kraken response (.json) or raw-row CSV (.csv)
    /// instead of fetching
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of rows in the preview table (defaults to analysis.preview_rows)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the decorated series to file (.csv or .json)
    #[arg(long)]
    pub save: Option<PathBuf>,
}
