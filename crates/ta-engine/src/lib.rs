//! Indicator and signal engine.
//!
//! This crate turns raw OHLCV rows into a decorated series:
//! - [`SeriesBuilder`] normalizes rows and writes the indicator columns
//! - [`SignalClassifier`] derives the buy and sell columns from them
//!
//! [`analyze`] runs the whole pipeline in one call.

mod builder;
mod classifier;

pub use builder::{SeriesBuilder, BAND_MULTIPLIER, PRICE_WINDOW, RSI_WINDOW};
pub use classifier::{BarContext, SignalClassifier, SignalRule, BUY_RULES, SELL_RULES};

use ta_core::{types::RawRow, InsufficientHistoryWarning, Series, TaResult};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub series: Series,
    pub warnings: Vec<InsufficientHistoryWarning>,
}

/// Normalize `rows` and compute every column.
pub fn analyze(rows: &[RawRow]) -> TaResult<Analysis> {
    let mut series = SeriesBuilder::normalize(rows)?;
    let warnings = SeriesBuilder::new().get_metrics(&mut series)?;
    Ok(Analysis { series, warnings })
}
