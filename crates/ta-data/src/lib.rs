//! Market data collaborators and series export.
//!
//! Inbound: the Kraken public OHLC client plus file loaders for saved
//! Kraken responses and raw-row CSV. Outbound: CSV/JSON export of a
//! decorated series.

mod csv_source;
mod export;
mod kraken;

pub use csv_source::CsvRowSource;
pub use export::{render, save, to_json, write_csv, ExportFormat};
pub use kraken::{load_kraken_json, parse_ohlc_response, KrakenClient};

use std::path::Path;
use ta_core::error::DataError;
use ta_core::types::{AssetPair, RawRow};

/// Load raw rows from a CSV file without blocking the runtime.
pub async fn load_csv_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>, DataError> {
    CsvRowSource::new(path)?.load().await
}

/// Load raw rows from a file, picking the loader by extension.
///
/// `.json` files are read as saved Kraken responses for `pair`; `.csv`
/// files as raw rows.
pub async fn load_rows(path: &Path, pair: AssetPair) -> Result<Vec<RawRow>, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("json") => load_kraken_json(path, pair).await,
        Some("csv") => load_csv_rows(path).await,
        _ => Err(DataError::ParseError(format!(
            "unsupported input file: {}",
            path.display()
        ))),
    }
}
