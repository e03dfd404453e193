//! OHLC sampling intervals offered by Kraken.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Sampling interval of a bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    #[default]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "1w")]
    Weekly,
    #[serde(rename = "15d")]
    Days15,
}

impl Interval {
    /// Interval length in minutes, as the OHLC endpoint expects it.
    pub fn as_minutes(&self) -> u32 {
        match self {
            Interval::Minute1 => 1,
            Interval::Minute5 => 5,
            Interval::Minute15 => 15,
            Interval::Minute30 => 30,
            Interval::Hour1 => 60,
            Interval::Hour4 => 240,
            Interval::Daily => 1440,
            Interval::Weekly => 10080,
            Interval::Days15 => 21600,
        }
    }

    /// Interval length in seconds.
    pub fn as_secs(&self) -> u64 {
        u64::from(self.as_minutes()) * 60
    }

    /// Look up an interval by its length in minutes.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|interval| interval.as_minutes() == minutes)
    }

    /// Get all available intervals.
    pub fn all() -> &'static [Interval] {
        &[
            Interval::Minute1,
            Interval::Minute5,
            Interval::Minute15,
            Interval::Minute30,
            Interval::Hour1,
            Interval::Hour4,
            Interval::Daily,
            Interval::Weekly,
            Interval::Days15,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::Minute1 => "1m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Hour4 => "4h",
            Interval::Daily => "1d",
            Interval::Weekly => "1w",
            Interval::Days15 => "15d",
        };
        f.write_str(s)
    }
}

impl FromStr for Interval {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(minutes) = normalized.parse::<u32>() {
            return Self::from_minutes(minutes)
                .ok_or_else(|| DataError::InvalidInterval(s.to_string()));
        }
        match normalized.as_str() {
            "1m" | "1min" | "minute" => Ok(Interval::Minute1),
            "5m" | "5min" => Ok(Interval::Minute5),
            "15m" | "15min" => Ok(Interval::Minute15),
            "30m" | "30min" => Ok(Interval::Minute30),
            "1h" | "1hour" | "hour" | "hourly" => Ok(Interval::Hour1),
            "4h" | "4hour" => Ok(Interval::Hour4),
            "1d" | "day" | "daily" => Ok(Interval::Daily),
            "1w" | "week" | "weekly" => Ok(Interval::Weekly),
            "15d" => Ok(Interval::Days15),
            _ => Err(DataError::InvalidInterval(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_duration() {
        assert_eq!(Interval::Minute1.as_minutes(), 1);
        assert_eq!(Interval::Hour1.as_minutes(), 60);
        assert_eq!(Interval::Hour1.as_secs(), 3600);
        assert_eq!(Interval::Days15.as_minutes(), 21600);
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!(Interval::from_str("1h").unwrap(), Interval::Hour1);
        assert_eq!(Interval::from_str("60").unwrap(), Interval::Hour1);
        assert_eq!(Interval::from_str("Daily").unwrap(), Interval::Daily);
        assert!(Interval::from_str("2h").is_err());
        assert!(Interval::from_str("7").is_err());
    }

    #[test]
    fn test_interval_display_round_trip() {
        for interval in Interval::all() {
            assert_eq!(Interval::from_str(&interval.to_string()).unwrap(), *interval);
        }
    }

    #[test]
    fn test_default_is_hourly() {
        assert_eq!(Interval::default(), Interval::Hour1);
    }
}
