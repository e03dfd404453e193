//! Decorated bar series: the bars plus indicator and signal columns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{PriceBar, SignalSide, SignalState};
use crate::error::IndicatorError;

/// Numeric derived columns of a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SmaPrice,
    SmaVolume,
    BandUpper,
    BandLower,
    Rsi,
}

impl Column {
    /// Column name used in exports and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Column::SmaPrice => "sma_price",
            Column::SmaVolume => "sma_volume",
            Column::BandUpper => "band_upper",
            Column::BandLower => "band_lower",
            Column::Rsi => "rsi",
        }
    }

    pub fn all() -> &'static [Column] {
        &[
            Column::SmaPrice,
            Column::SmaVolume,
            Column::BandUpper,
            Column::BandLower,
            Column::Rsi,
        ]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned, mutable time-ordered table.
///
/// Position order is time order. Every derived column is either absent
/// (not computed yet) or exactly as long as the bar vector, with `None`
/// marking positions that lack enough history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Pair label for presentation, if known
    pub pair: Option<String>,
    bars: Vec<PriceBar>,
    sma_price: Option<Vec<Option<f64>>>,
    sma_volume: Option<Vec<Option<f64>>>,
    band_upper: Option<Vec<Option<f64>>>,
    band_lower: Option<Vec<Option<f64>>>,
    rsi: Option<Vec<Option<f64>>>,
    buy_signal: Option<Vec<SignalState>>,
    sell_signal: Option<Vec<SignalState>>,
}

impl Series {
    /// Create a series with no derived columns.
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self {
            bars,
            ..Default::default()
        }
    }

    /// Attach a pair label.
    pub fn with_pair(mut self, pair: impl Into<String>) -> Self {
        self.pair = Some(pair.into());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Get a bar by position (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Read a derived column; `None` if it has not been computed.
    pub fn column(&self, column: Column) -> Option<&[Option<f64>]> {
        self.slot(column).as_deref()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.slot(column).is_some()
    }

    /// Replace a derived column wholesale.
    pub fn set_column(
        &mut self,
        column: Column,
        values: Vec<Option<f64>>,
    ) -> Result<(), IndicatorError> {
        self.check_len(column.name(), values.len())?;
        *self.slot_mut(column) = Some(values);
        Ok(())
    }

    pub fn sma_price(&self) -> Option<&[Option<f64>]> {
        self.column(Column::SmaPrice)
    }

    pub fn sma_volume(&self) -> Option<&[Option<f64>]> {
        self.column(Column::SmaVolume)
    }

    pub fn band_upper(&self) -> Option<&[Option<f64>]> {
        self.column(Column::BandUpper)
    }

    pub fn band_lower(&self) -> Option<&[Option<f64>]> {
        self.column(Column::BandLower)
    }

    pub fn rsi(&self) -> Option<&[Option<f64>]> {
        self.column(Column::Rsi)
    }

    /// Read a signal column; `None` if the classifier has not run.
    pub fn signals(&self, side: SignalSide) -> Option<&[SignalState]> {
        match side {
            SignalSide::Buy => self.buy_signal.as_deref(),
            SignalSide::Sell => self.sell_signal.as_deref(),
        }
    }

    /// Replace a signal column wholesale.
    pub fn set_signals(
        &mut self,
        side: SignalSide,
        values: Vec<SignalState>,
    ) -> Result<(), IndicatorError> {
        self.check_len(side.column_name(), values.len())?;
        match side {
            SignalSide::Buy => self.buy_signal = Some(values),
            SignalSide::Sell => self.sell_signal = Some(values),
        }
        Ok(())
    }

    pub fn buy_signal(&self) -> Option<&[SignalState]> {
        self.signals(SignalSide::Buy)
    }

    pub fn sell_signal(&self) -> Option<&[SignalState]> {
        self.signals(SignalSide::Sell)
    }

    /// Positions where the given signal triggered.
    pub fn signal_positions(&self, side: SignalSide) -> Vec<usize> {
        self.signals(side)
            .map(|states| {
                states
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_triggered())
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Flattened view of one position.
    pub fn row(&self, index: usize) -> Option<DecoratedRow> {
        let bar = self.bars.get(index)?;
        let value = |column: Column| self.column(column).and_then(|c| c[index]);
        let flag = |side: SignalSide| self.signals(side).and_then(|s| s[index].as_flag());

        Some(DecoratedRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            vwap: bar.vwap,
            volume: bar.volume,
            trade_count: bar.trade_count,
            sma_price: value(Column::SmaPrice),
            sma_volume: value(Column::SmaVolume),
            band_upper: value(Column::BandUpper),
            band_lower: value(Column::BandLower),
            rsi: value(Column::Rsi),
            buy_signal: flag(SignalSide::Buy),
            sell_signal: flag(SignalSide::Sell),
        })
    }

    /// Iterate over flattened rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = DecoratedRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    fn check_len(&self, column: &'static str, found: usize) -> Result<(), IndicatorError> {
        if found != self.bars.len() {
            return Err(IndicatorError::LengthMismatch {
                column,
                expected: self.bars.len(),
                found,
            });
        }
        Ok(())
    }

    fn slot(&self, column: Column) -> &Option<Vec<Option<f64>>> {
        match column {
            Column::SmaPrice => &self.sma_price,
            Column::SmaVolume => &self.sma_volume,
            Column::BandUpper => &self.band_upper,
            Column::BandLower => &self.band_lower,
            Column::Rsi => &self.rsi,
        }
    }

    fn slot_mut(&mut self, column: Column) -> &mut Option<Vec<Option<f64>>> {
        match column {
            Column::SmaPrice => &mut self.sma_price,
            Column::SmaVolume => &mut self.sma_volume,
            Column::BandUpper => &mut self.band_upper,
            Column::BandLower => &mut self.band_lower,
            Column::Rsi => &mut self.rsi,
        }
    }
}

impl FromIterator<PriceBar> for Series {
    fn from_iter<T: IntoIterator<Item = PriceBar>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One position of a decorated series, as handed to presentation and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedRow {
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub vwap: f64,
    pub volume: f64,
    pub trade_count: u64,
    pub sma_price: Option<f64>,
    pub sma_volume: Option<f64>,
    pub band_upper: Option<f64>,
    pub band_lower: Option<f64>,
    pub rsi: Option<f64>,
    pub buy_signal: Option<u8>,
    pub sell_signal: Option<u8>,
}
