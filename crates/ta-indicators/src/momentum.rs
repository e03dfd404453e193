//! Momentum indicators.

use ta_core::traits::Indicator;

use crate::simd::{split_changes_simd, sum_simd};

/// Relative Strength Index (RSI) over simple rolling means.
///
/// Gains and losses are averaged with an unweighted mean over the last
/// `period` price changes (no Wilder smoothing). The first change is at
/// position 1, so the first defined value is at position `period`.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

/// RSI from average gain and loss, saturated where the ratio is undefined.
///
/// Zero average loss gives 100 when there were gains and 50 when the
/// window was completely flat.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            100.0
        } else {
            50.0
        }
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let (gains, losses) = split_changes_simd(data);
        let period_f64 = self.period as f64;

        (0..data.len())
            .map(|i| {
                if i < self.period {
                    return None;
                }
                // Changes at positions i - period + 1 ..= i
                let window = i - self.period..i;
                let avg_gain = sum_simd(&gains[window.clone()]) / period_f64;
                let avg_loss = sum_simd(&losses[window]) / period_f64;
                Some(rsi_from_averages(avg_gain, avg_loss))
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_basic() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), 30);
        assert!(result[..14].iter().all(Option::is_none));

        for value in result[14..].iter() {
            let value = value.unwrap();
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_simple_mean_window() {
        let rsi = Rsi::new(3);
        // Changes: +2, -1, +3, -2
        let data = vec![10.0, 12.0, 11.0, 14.0, 12.0];
        let result = rsi.calculate(&data);

        assert!(result[..3].iter().all(Option::is_none));
        // Position 3: gains (2, 0, 3) -> 5/3, losses (0, 1, 0) -> 1/3, rs = 5
        assert!((result[3].unwrap() - (100.0 - 100.0 / 6.0)).abs() < 1e-10);
        // Position 4: gains (0, 3, 0) -> 1, losses (1, 0, 2) -> 1, rs = 1
        assert!((result[4].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert_eq!(result[5], Some(100.0));
        assert_eq!(result[6], Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_window_is_neutral() {
        let rsi = Rsi::new(4);
        let result = rsi.calculate(&[5.0; 6]);

        assert_eq!(result[4], Some(50.0));
        assert_eq!(result[5], Some(50.0));
    }

    #[test]
    fn test_rsi_losses_leave_window_exactly() {
        let rsi = Rsi::new(3);
        // One early loss, then only gains: once the loss leaves the window
        // the average loss must be exactly zero.
        let data = vec![10.0, 9.7, 9.9, 10.1, 10.3, 10.6];
        let result = rsi.calculate(&data);

        assert!(result[3].unwrap() < 100.0);
        assert_eq!(result[4], Some(100.0));
        assert_eq!(result[5], Some(100.0));
    }

    #[test]
    fn test_saturation_rules() {
        assert_eq!(rsi_from_averages(1.0, 0.0), 100.0);
        assert_eq!(rsi_from_averages(0.0, 0.0), 50.0);
        assert_eq!(rsi_from_averages(0.0, 1.0), 0.0);
        assert!((rsi_from_averages(1.0, 1.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_rsi_short_series() {
        let rsi = Rsi::new(14);
        assert_eq!(rsi.calculate(&[1.0]), vec![None]);
        assert!(rsi.calculate(&[]).is_empty());
    }
}
