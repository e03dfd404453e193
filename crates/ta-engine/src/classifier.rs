//! Rule-based buy/sell classification over a decorated series.
//!
//! Each side has an ordered list of rules. At every eligible position the
//! rules are tried in order and the first match sets the signal; later
//! rules are not consulted.

use ta_core::{
    error::IndicatorError,
    types::{Series, SignalSide, SignalState},
};
use tracing::debug;

use crate::builder::PRICE_WINDOW;

/// Inputs a rule sees at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarContext {
    pub close: f64,
    pub prev_close: f64,
    pub volume: f64,
    pub sma_volume: f64,
    pub band_upper: f64,
    pub band_lower: f64,
}

/// A named signal condition.
#[derive(Debug, Clone, Copy)]
pub struct SignalRule {
    pub name: &'static str,
    predicate: fn(&BarContext) -> bool,
}

impl SignalRule {
    pub const fn new(name: &'static str, predicate: fn(&BarContext) -> bool) -> Self {
        Self { name, predicate }
    }

    #[inline]
    pub fn matches(&self, ctx: &BarContext) -> bool {
        (self.predicate)(ctx)
    }
}

fn recovering_below_lower_band(c: &BarContext) -> bool {
    c.close < c.band_lower && c.volume > c.sma_volume && c.close > c.prev_close
}

fn at_lower_band_on_low_volume(c: &BarContext) -> bool {
    c.close <= c.band_lower && c.volume < c.sma_volume
}

fn fading_above_upper_band(c: &BarContext) -> bool {
    c.close > c.band_upper && c.volume > c.sma_volume && c.close < c.prev_close
}

fn at_upper_band_on_low_volume(c: &BarContext) -> bool {
    c.close >= c.band_upper && c.volume < c.sma_volume
}

/// Buy rules, in evaluation order.
pub const BUY_RULES: [SignalRule; 2] = [
    SignalRule::new("recovering_below_lower_band", recovering_below_lower_band),
    SignalRule::new("at_lower_band_on_low_volume", at_lower_band_on_low_volume),
];

/// Sell rules, in evaluation order.
pub const SELL_RULES: [SignalRule; 2] = [
    SignalRule::new("fading_above_upper_band", fading_above_upper_band),
    SignalRule::new("at_upper_band_on_low_volume", at_upper_band_on_low_volume),
];

/// Derives buy and sell columns from bands and volume SMA.
///
/// Positions before [`start`](Self::start) are always unset; positions
/// whose inputs are null never match.
#[derive(Debug, Clone)]
pub struct SignalClassifier {
    start: usize,
}

impl SignalClassifier {
    pub fn new() -> Self {
        Self {
            start: PRICE_WINDOW,
        }
    }

    /// First position the rules are evaluated at.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Rules of one side, in evaluation order.
    pub fn rules(&self, side: SignalSide) -> &'static [SignalRule] {
        match side {
            SignalSide::Buy => &BUY_RULES,
            SignalSide::Sell => &SELL_RULES,
        }
    }

    /// Name of the rule that fired at each position, if any.
    pub fn matched_rules(
        &self,
        series: &Series,
        side: SignalSide,
    ) -> Result<Vec<Option<&'static str>>, IndicatorError> {
        let upper = series
            .band_upper()
            .ok_or(IndicatorError::MissingColumn("band_upper"))?;
        let lower = series
            .band_lower()
            .ok_or(IndicatorError::MissingColumn("band_lower"))?;
        let sma_volume = series
            .sma_volume()
            .ok_or(IndicatorError::MissingColumn("sma_volume"))?;
        let bars = series.bars();
        let rules = self.rules(side);

        Ok((0..bars.len())
            .map(|i| {
                if i < self.start || i == 0 {
                    return None;
                }
                let ctx = BarContext {
                    close: bars[i].close,
                    prev_close: bars[i - 1].close,
                    volume: bars[i].volume,
                    sma_volume: sma_volume[i]?,
                    band_upper: upper[i]?,
                    band_lower: lower[i]?,
                };
                rules.iter().find(|rule| rule.matches(&ctx)).map(|rule| rule.name)
            })
            .collect())
    }

    /// Signal column of one side, rebuilt from scratch.
    pub fn classify(
        &self,
        series: &Series,
        side: SignalSide,
    ) -> Result<Vec<SignalState>, IndicatorError> {
        let matched = self.matched_rules(series, side)?;

        for (i, rule) in matched.iter().enumerate() {
            if let Some(rule) = rule {
                debug!(%side, position = i, rule, "signal triggered");
            }
        }

        Ok(matched
            .into_iter()
            .map(|rule| match rule {
                Some(_) => SignalState::Triggered,
                None => SignalState::Unset,
            })
            .collect())
    }

    /// Write `buy_signal`, replacing any previous column.
    pub fn classify_buy(&self, series: &mut Series) -> Result<(), IndicatorError> {
        let states = self.classify(series, SignalSide::Buy)?;
        series.set_signals(SignalSide::Buy, states)
    }

    /// Write `sell_signal`, replacing any previous column.
    pub fn classify_sell(&self, series: &mut Series) -> Result<(), IndicatorError> {
        let states = self.classify(series, SignalSide::Sell)?;
        series.set_signals(SignalSide::Sell, states)
    }
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self::new()
    }
}
