//! Export of a decorated series to CSV or JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use ta_core::error::DataError;
use ta_core::types::{DecoratedRow, Series};
use tracing::info;

/// File format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DataError::ParseError(format!("unknown export format: {s}"))),
        }
    }
}

/// Write every decorated row as CSV with a header line.
///
/// Null indicator values and unset signals become empty cells.
pub fn write_csv<W: io::Write>(series: &Series, writer: W) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in series.rows() {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render every decorated row as a pretty-printed JSON array.
pub fn to_json(series: &Series) -> Result<String, DataError> {
    let rows: Vec<DecoratedRow> = series.rows().collect();
    serde_json::to_string_pretty(&rows).map_err(|e| DataError::ParseError(e.to_string()))
}

/// Render the whole series in `format`.
pub fn render(series: &Series, format: ExportFormat) -> Result<String, DataError> {
    match format {
        ExportFormat::Json => to_json(series),
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(series, &mut buf)?;
            String::from_utf8(buf).map_err(|e| DataError::ParseError(e.to_string()))
        }
    }
}

/// Write the series to `path` in `format`, replacing any existing file.
pub async fn save(series: &Series, path: &Path, format: ExportFormat) -> Result<(), DataError> {
    let content = render(series, format)?;
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), %format, rows = series.len(), "saved export");
    Ok(())
}

fn csv_error(e: csv::Error) -> DataError {
    if e.is_io_error() {
        DataError::Io(e.into())
    } else {
        DataError::ParseError(e.to_string())
    }
}
