//! Error types for the indicator engine.

use std::fmt;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum TaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Malformed row: {0}")]
    MalformedRow(#[from] MalformedRowError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TaError {
    fn from(e: serde_json::Error) -> Self {
        TaError::Serialization(e.to_string())
    }
}

/// A raw provider row that cannot be normalized.
///
/// Always fatal: a series is never built from a partially valid batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedRowError {
    #[error("row {index} has {found} fields, expected 8")]
    WrongArity { index: usize, found: usize },

    #[error("row {index}: field `{field}` is not numeric: {value:?}")]
    UnparseableField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {index}: timestamp {value} is outside the supported date range")]
    TimestampOutOfRange { index: usize, value: i64 },

    #[error("row {index}: timestamp {value} does not follow previous timestamp {previous}")]
    OutOfOrder {
        index: usize,
        previous: i64,
        value: i64,
    },
}

impl MalformedRowError {
    /// Position of the offending row in the input batch.
    pub fn index(&self) -> usize {
        match self {
            MalformedRowError::WrongArity { index, .. }
            | MalformedRowError::UnparseableField { index, .. }
            | MalformedRowError::TimestampOutOfRange { index, .. }
            | MalformedRowError::OutOfOrder { index, .. } => *index,
        }
    }
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Column `{0}` has not been computed")]
    MissingColumn(&'static str),

    #[error("Column `{column}` has {found} values, series has {expected} bars")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Non-fatal notice that a series is too short for an indicator family.
///
/// The affected leading positions are left null; the build still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsufficientHistoryWarning {
    /// Indicator or signal family affected
    pub indicator: &'static str,
    /// Bars needed for the first defined value
    pub required: usize,
    /// Bars supplied
    pub available: usize,
}

impl fmt::Display for InsufficientHistoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} needs {} bars, series has {}; leading values left null",
            self.indicator, self.required, self.available
        )
    }
}

/// Result type alias for engine operations.
pub type TaResult<T> = Result<T, TaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_index() {
        let err = MalformedRowError::UnparseableField {
            index: 7,
            field: "close",
            value: "abc".to_string(),
        };
        assert_eq!(err.index(), 7);
        assert!(err.to_string().contains("close"));
    }

    #[test]
    fn test_malformed_row_converts_to_top_level() {
        let err: TaError = MalformedRowError::WrongArity { index: 2, found: 7 }.into();
        assert!(matches!(
            err,
            TaError::MalformedRow(MalformedRowError::WrongArity { index: 2, found: 7 })
        ));
    }

    #[test]
    fn test_json_error_is_serialization() {
        let err: TaError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(err, TaError::Serialization(_)));
    }

    #[test]
    fn test_warning_display() {
        let warning = InsufficientHistoryWarning {
            indicator: "RSI",
            required: 15,
            available: 10,
        };
        assert_eq!(
            warning.to_string(),
            "RSI needs 15 bars, series has 10; leading values left null"
        );
    }
}
