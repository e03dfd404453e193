//! CSV data source.

use async_trait::async_trait;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use ta_core::error::DataError;
use ta_core::traits::DataSource;
use ta_core::types::{AssetPair, Interval, RawField, RawRow};
use tracing::debug;

/// Raw rows stored as CSV, one header line then one row per bar.
///
/// Columns are expected in wire order
/// (`timestamp, open, high, low, close, vwap, volume, trade_count`). Cells
/// are handed over as text and checked later by the series builder, so a
/// short row surfaces as a malformed-row error rather than a CSV error.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load every row of the file, in file order.
    pub fn load_all(&self) -> Result<Vec<RawRow>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            rows.push(record.iter().map(RawField::from).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded CSV rows");
        Ok(rows)
    }

    /// [`load_all`](Self::load_all) on the blocking thread pool.
    pub async fn load(&self) -> Result<Vec<RawRow>, DataError> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.load_all())
            .await
            .map_err(|e| DataError::Io(std::io::Error::other(e)))?
    }
}

#[async_trait]
impl DataSource for CsvRowSource {
    /// The file holds a single series; pair and interval are not checked.
    async fn fetch_ohlc(
        &self,
        _pair: AssetPair,
        _interval: Interval,
    ) -> Result<Vec<RawRow>, DataError> {
        self.load().await
    }

    fn name(&self) -> &str {
        "csv"
    }
}
