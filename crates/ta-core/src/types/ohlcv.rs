//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field names of a raw provider row, in wire order.
pub const RAW_ROW_FIELDS: [&str; 8] = [
    "timestamp",
    "open",
    "high",
    "low",
    "close",
    "vwap",
    "volume",
    "trade_count",
];

/// One cell of a raw provider row.
///
/// Kraken sends the timestamp and trade count as JSON integers and every
/// price/volume as a decimal string, so all three shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawField {
    /// Interpret the cell as a floating-point number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawField::Int(v) => Some(*v as f64),
            RawField::Float(v) => Some(*v),
            RawField::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Interpret the cell as an integer. Floats must be integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawField::Int(v) => Some(*v),
            RawField::Float(v) => integral(*v),
            RawField::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
        }
    }

    /// Interpret the cell as a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_i64().and_then(|v| u64::try_from(v).ok())
    }
}

fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawField::Int(v) => write!(f, "{v}"),
            RawField::Float(v) => write!(f, "{v}"),
            RawField::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawField {
    fn from(v: i64) -> Self {
        RawField::Int(v)
    }
}

impl From<f64> for RawField {
    fn from(v: f64) -> Self {
        RawField::Float(v)
    }
}

impl From<&str> for RawField {
    fn from(v: &str) -> Self {
        RawField::Text(v.to_string())
    }
}

impl From<String> for RawField {
    fn from(v: String) -> Self {
        RawField::Text(v)
    }
}

/// One provider row: `(timestamp, open, high, low, close, vwap, volume, trade_count)`.
pub type RawRow = Vec<RawField>;

/// Normalized OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time (UTC)
    pub date: DateTime<Utc>,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Volume-weighted average price
    pub vwap: f64,
    /// Traded volume
    pub volume: f64,
    /// Number of trades in the period
    pub trade_count: u64,
}

impl PriceBar {
    /// Create a new bar. VWAP defaults to the close and the trade count to zero.
    pub fn new(
        date: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            vwap: close,
            volume,
            trade_count: 0,
        }
    }

    /// Set the trade count.
    pub fn with_trade_count(mut self, trade_count: u64) -> Self {
        self.trade_count = trade_count;
        self
    }

    /// Epoch seconds of the bar open.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.date.timestamp()
    }
}
