//! Analyze command implementation.

use anyhow::{Context, Result};
use std::io;
use ta_config::AppConfig;
use ta_core::traits::DataSource;
use ta_data::{load_rows, render, save, write_csv, ExportFormat, KrakenClient};
use ta_engine::{analyze, Analysis};
use ta_monitor::{render_preview, signal_summary};
use tracing::info;

use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config: AppConfig) -> Result<()> {
    let pair = match args.pair {
        Some(pair) => pair,
        None => config.default_pair()?,
    };
    let interval = args.interval.unwrap_or(config.analysis.interval);

    // Load rows
    let rows = if let Some(input) = &args.input {
        if !input.exists() {
            anyhow::bail!("Input file '{}' does not exist", input.display());
        }
        load_rows(input, pair)
            .await
            .with_context(|| format!("Failed to load rows from {}", input.display()))?
    } else {
        let client = KrakenClient::new(
            config.kraken.base_url.as_str(),
            config.request_timeout(),
            &config.kraken.user_agent,
        )?;
        info!(%pair, %interval, "fetching OHLC from Kraken");
        client
            .fetch_ohlc(pair, interval)
            .await
            .context("Failed to fetch OHLC data from Kraken")?
    };

    let Analysis { series, warnings } = analyze(&rows).context("Failed to analyze series")?;
    let series = series.with_pair(pair.display_name());

    // Output results
    match args.output {
        OutputFormat::Json => println!("{}", render(&series, ExportFormat::Json)?),
        OutputFormat::Csv => write_csv(&series, io::stdout().lock())?,
        OutputFormat::Text => {
            let rows = args.rows.unwrap_or(config.analysis.preview_rows);
            for warning in &warnings {
                println!("warning: {warning}");
            }
            println!("{}", render_preview(&series, rows));
            print!("{}", signal_summary(&series));
        }
    }

    // Save if requested
    if let Some(path) = &args.save {
        let format = ExportFormat::from_path(path).unwrap_or(match args.output {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Text | OutputFormat::Csv => ExportFormat::Csv,
        });
        save(&series, path, format).await?;
        info!("Results saved to {:?}", path);
    }

    Ok(())
}
