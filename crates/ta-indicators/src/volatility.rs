//! Volatility indicators.

use serde::{Deserialize, Serialize};
use ta_core::traits::Indicator;

use crate::moving_average::Sma;
use crate::simd::population_variance_simd;

/// Population standard deviation over a trailing window (current value
/// included).
#[derive(Debug, Clone)]
pub struct StdDev {
    period: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        Self { period }
    }
}

impl Indicator for StdDev {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        (0..data.len())
            .map(|i| {
                if i + 1 < self.period {
                    return None;
                }
                population_variance_simd(&data[i + 1 - self.period..=i]).map(f64::sqrt)
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Volatility band output at one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandOutput {
    /// Upper band
    pub upper: f64,
    /// Middle band (the price SMA at this position)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
    /// Standard deviation the bands were spread by
    pub sigma: f64,
}

impl BandOutput {
    /// Distance between the bands.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Volatility bands around a price SMA.
///
/// The deviation at position `i` is taken over the `period` closes strictly
/// before `i` (`[i - period, i - 1]`), one position behind the SMA window
/// `[i - period + 1, i]`. Bands are therefore first defined at position
/// `period`, one bar after the SMA.
#[derive(Debug, Clone)]
pub struct VolatilityBands {
    period: usize,
    multiplier: f64,
}

impl VolatilityBands {
    /// Create bands with the given window and deviation multiplier.
    pub fn with_params(period: usize, multiplier: f64) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        assert!(multiplier > 0.0, "Multiplier must be positive");
        Self { period, multiplier }
    }

    /// Calculate bands around an already computed middle column.
    ///
    /// `middle` must be aligned with `data`; positions where it is `None`
    /// produce no band.
    pub fn calculate_with_middle(
        &self,
        data: &[f64],
        middle: &[Option<f64>],
    ) -> Vec<Option<BandOutput>> {
        let sigma = StdDev::new(self.period).calculate(data);

        (0..data.len())
            .map(|i| {
                if i < self.period {
                    return None;
                }
                // sigma[i - 1] covers [i - period, i - 1]
                let sigma = sigma[i - 1]?;
                let middle = (*middle.get(i)?)?;
                let spread = self.multiplier * sigma;
                Some(BandOutput {
                    upper: middle + spread,
                    middle,
                    lower: middle - spread,
                    sigma,
                })
            })
            .collect()
    }
}

impl Indicator for VolatilityBands {
    type Output = BandOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<BandOutput>> {
        let middle = Sma::new(self.period).calculate(data);
        self.calculate_with_middle(data, &middle)
    }

    fn period(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "Volatility Bands"
    }
}
