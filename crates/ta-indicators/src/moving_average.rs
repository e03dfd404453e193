//! Moving average indicators.

use ta_core::traits::Indicator;

use crate::simd::sum_simd;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values, the current one
/// included. The first `N - 1` positions are `None`.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let period_f64 = self.period as f64;

        (0..data.len())
            .map(|i| {
                if i + 1 < self.period {
                    return None;
                }
                let window = &data[i + 1 - self.period..=i];
                Some(sum_simd(window) / period_f64)
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert!((result[2].unwrap() - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[3].unwrap() - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[4].unwrap() - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];
        let result = sma.calculate(&data);

        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_sma_twenty_window() {
        let sma = Sma::new(20);
        let data: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let result = sma.calculate(&data);

        assert!(result[18].is_none());
        // mean(100..=119)
        assert!((result[19].unwrap() - 109.5).abs() < 1e-10);
        // mean(105..=124)
        assert!((result[24].unwrap() - 114.5).abs() < 1e-10);
    }
}
