//! Indicator trait definitions.

/// Trait for windowed technical indicators.
///
/// Output is aligned 1:1 with the input so it can be written straight
/// into a series column: positions without enough history are `None`.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically prices)
    ///
    /// # Returns
    /// A vector with exactly `data.len()` entries
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Get the minimum data points required for the first defined value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WindowSum {
        period: usize,
    }

    impl Indicator for WindowSum {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            (0..data.len())
                .map(|i| {
                    (i + 1 >= self.period)
                        .then(|| data[i + 1 - self.period..=i].iter().sum::<f64>())
                })
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "window-sum"
        }
    }

    #[test]
    fn test_indicator_alignment() {
        let indicator = WindowSum { period: 3 };
        let result = indicator.calculate(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(result, vec![None, None, Some(6.0), Some(9.0)]);
    }
}
