//! Series construction and indicator columns.
//!
//! Raw provider rows are normalized into a [`Series`], then the four
//! indicator families are written into it in place.

use chrono::DateTime;
use ta_core::{
    error::IndicatorError,
    traits::Indicator,
    types::{Column, PriceBar, RawField, RawRow, Series, RAW_ROW_FIELDS},
    InsufficientHistoryWarning, MalformedRowError, TaResult,
};
use ta_indicators::{Rsi, Sma, VolatilityBands};
use tracing::{debug, info, warn};

use crate::classifier::SignalClassifier;

/// Window of the price and volume SMAs and of the band deviation.
pub const PRICE_WINDOW: usize = 20;
/// Deviation multiplier of the volatility bands.
pub const BAND_MULTIPLIER: f64 = 1.8;
/// Window of the RSI averages.
pub const RSI_WINDOW: usize = 14;

/// Builds decorated series from raw rows.
///
/// Windows and the band multiplier are fixed; see the crate constants.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    sma: Sma,
    bands: VolatilityBands,
    rsi: Rsi,
    classifier: SignalClassifier,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self {
            sma: Sma::new(PRICE_WINDOW),
            bands: VolatilityBands::with_params(PRICE_WINDOW, BAND_MULTIPLIER),
            rsi: Rsi::new(RSI_WINDOW),
            classifier: SignalClassifier::new(),
        }
    }

    /// Classifier used by [`get_metrics`](Self::get_metrics).
    pub fn classifier(&self) -> &SignalClassifier {
        &self.classifier
    }

    /// Normalize raw provider rows into a series without derived columns.
    ///
    /// Each row must hold exactly 8 fields in wire order. Price and volume
    /// fields may be numbers or numeric text; the epoch-second timestamp
    /// becomes the bar date. Timestamps must strictly increase. Any bad row
    /// aborts the whole batch.
    pub fn normalize(rows: &[RawRow]) -> Result<Series, MalformedRowError> {
        let mut bars = Vec::with_capacity(rows.len());
        let mut previous: Option<i64> = None;

        for (index, row) in rows.iter().enumerate() {
            let bar = parse_row(index, row)?;
            let timestamp = bar.timestamp();

            if let Some(previous) = previous {
                if timestamp <= previous {
                    return Err(MalformedRowError::OutOfOrder {
                        index,
                        previous,
                        value: timestamp,
                    });
                }
            }
            previous = Some(timestamp);
            bars.push(bar);
        }

        debug!(bars = bars.len(), "normalized raw rows");
        Ok(Series::new(bars))
    }

    /// `sma_price[i]` = mean of `close[i-19..=i]`, null before position 19.
    pub fn compute_sma_price(&self, series: &mut Series) -> Result<(), IndicatorError> {
        let values = self.sma.calculate(&series.closes());
        series.set_column(Column::SmaPrice, values)?;
        debug!(column = "sma_price", "computed column");
        Ok(())
    }

    /// `sma_volume[i]` = mean of `volume[i-19..=i]`, null before position 19.
    pub fn compute_sma_volume(&self, series: &mut Series) -> Result<(), IndicatorError> {
        let values = self.sma.calculate(&series.volumes());
        series.set_column(Column::SmaVolume, values)?;
        debug!(column = "sma_volume", "computed column");
        Ok(())
    }

    /// Volatility bands around `sma_price`, computing the SMA first if absent.
    ///
    /// Null before position 20. The deviation window sits one position
    /// behind the SMA window: `close[i-20..=i-1]`.
    pub fn compute_bands(&self, series: &mut Series) -> Result<(), IndicatorError> {
        if !series.has_column(Column::SmaPrice) {
            self.compute_sma_price(series)?;
        }
        let middle = series
            .sma_price()
            .ok_or(IndicatorError::MissingColumn("sma_price"))?;

        let bands = self.bands.calculate_with_middle(&series.closes(), middle);
        let upper = bands.iter().map(|b| b.map(|b| b.upper)).collect();
        let lower = bands.iter().map(|b| b.map(|b| b.lower)).collect();

        series.set_column(Column::BandUpper, upper)?;
        series.set_column(Column::BandLower, lower)?;
        debug!(column = "band_upper/band_lower", "computed column");
        Ok(())
    }

    /// RSI over 14 simple-mean gains and losses, null before position 14.
    pub fn compute_rsi(&self, series: &mut Series) -> Result<(), IndicatorError> {
        let values = self.rsi.calculate(&series.closes());
        series.set_column(Column::Rsi, values)?;
        debug!(column = "rsi", "computed column");
        Ok(())
    }

    /// Compute every indicator column, then both signal columns.
    ///
    /// Order: RSI, price SMA, bands, volume SMA, buy, sell. Short series are
    /// not an error; the returned warnings name the families that could not
    /// produce any value.
    pub fn get_metrics(&self, series: &mut Series) -> TaResult<Vec<InsufficientHistoryWarning>> {
        info!(bars = series.len(), pair = ?series.pair, "computing metrics");

        let warnings = self.history_warnings(series.len());
        for warning in &warnings {
            warn!(
                indicator = warning.indicator,
                required = warning.required,
                available = warning.available,
                "insufficient history"
            );
        }

        self.compute_rsi(series)?;
        self.compute_sma_price(series)?;
        self.compute_bands(series)?;
        self.compute_sma_volume(series)?;

        self.classifier.classify_buy(series)?;
        self.classifier.classify_sell(series)?;

        info!(
            buys = series.signal_positions(ta_core::SignalSide::Buy).len(),
            sells = series.signal_positions(ta_core::SignalSide::Sell).len(),
            "metrics complete"
        );
        Ok(warnings)
    }

    fn history_warnings(&self, available: usize) -> Vec<InsufficientHistoryWarning> {
        [
            ("RSI", self.rsi.period()),
            ("SMA price", self.sma.period()),
            ("Volatility bands", self.bands.period()),
            ("SMA volume", self.sma.period()),
            ("Signals", self.classifier.start() + 1),
        ]
        .into_iter()
        .filter(|(_, required)| available < *required)
        .map(|(indicator, required)| InsufficientHistoryWarning {
            indicator,
            required,
            available,
        })
        .collect()
    }
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_row(index: usize, row: &[RawField]) -> Result<PriceBar, MalformedRowError> {
    if row.len() != RAW_ROW_FIELDS.len() {
        return Err(MalformedRowError::WrongArity {
            index,
            found: row.len(),
        });
    }

    let unparseable = |pos: usize| MalformedRowError::UnparseableField {
        index,
        field: RAW_ROW_FIELDS[pos],
        value: row[pos].to_string(),
    };
    // "inf" and "NaN" parse as f64 but would poison every window they enter
    let number = |pos: usize| {
        row[pos]
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| unparseable(pos))
    };

    let seconds = row[0].as_i64().ok_or_else(|| unparseable(0))?;
    let date = DateTime::from_timestamp(seconds, 0).ok_or(
        MalformedRowError::TimestampOutOfRange {
            index,
            value: seconds,
        },
    )?;

    Ok(PriceBar {
        date,
        open: number(1)?,
        high: number(2)?,
        low: number(3)?,
        close: number(4)?,
        vwap: number(5)?,
        volume: number(6)?,
        trade_count: row[7].as_u64().ok_or_else(|| unparseable(7))?,
    })
}
