//! Data source trait definitions.

use crate::error::DataError;
use crate::types::{AssetPair, Interval, RawRow};
use async_trait::async_trait;

/// Inbound market-data collaborator.
///
/// Implementations deliver raw provider rows ordered oldest to newest.
/// Fetching, retries and authentication are entirely their concern; the
/// engine only normalizes what it is given.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch OHLC rows for a pair at the given sampling interval.
    async fn fetch_ohlc(
        &self,
        pair: AssetPair,
        interval: Interval,
    ) -> Result<Vec<RawRow>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawField;

    struct FixedSource {
        rows: Vec<RawRow>,
    }

    #[async_trait]
    impl DataSource for FixedSource {
        async fn fetch_ohlc(
            &self,
            pair: AssetPair,
            _interval: Interval,
        ) -> Result<Vec<RawRow>, DataError> {
            if pair != AssetPair::BtcUsd {
                return Err(DataError::SymbolNotFound(pair.to_string()));
            }
            Ok(self.rows.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_data_source_object_safety() {
        let source: Box<dyn DataSource> = Box::new(FixedSource {
            rows: vec![vec![RawField::Int(1); 8]],
        });

        let rows = source
            .fetch_ohlc(AssetPair::BtcUsd, Interval::Hour1)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(source
            .fetch_ohlc(AssetPair::EthUsd, Interval::Hour1)
            .await
            .is_err());
    }
}
