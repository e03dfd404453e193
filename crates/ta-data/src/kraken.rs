//! Kraken public OHLC endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::time::Duration;
use ta_core::error::DataError;
use ta_core::traits::DataSource;
use ta_core::types::{AssetPair, Interval, RawRow};
use tracing::{debug, info, instrument};

/// Envelope of every Kraken public response.
#[derive(Debug, Deserialize)]
struct OhlcResponse {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: Option<Map<String, Value>>,
}

/// Unauthenticated client for `/0/public/OHLC`.
#[derive(Debug, Clone)]
pub struct KrakenClient {
    base_url: String,
    client: reqwest::Client,
}

impl KrakenClient {
    /// Create a client with a request timeout and user agent.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, DataError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(%base_url, "Kraken client initialised");

        Ok(Self { base_url, client })
    }

    fn ohlc_url(&self, pair: AssetPair, interval: Interval) -> String {
        format!(
            "{}/0/public/OHLC?pair={}&interval={}",
            self.base_url,
            pair.kraken_code(),
            interval.as_minutes()
        )
    }
}

#[async_trait]
impl DataSource for KrakenClient {
    #[instrument(skip(self), name = "kraken::fetch_ohlc")]
    async fn fetch_ohlc(
        &self,
        pair: AssetPair,
        interval: Interval,
    ) -> Result<Vec<RawRow>, DataError> {
        let url = self.ohlc_url(pair, interval);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(DataError::Api(format!("HTTP {status}")));
        }

        let rows = parse_ohlc_response(&body, pair.kraken_code())?;
        info!(rows = rows.len(), "fetched OHLC rows");
        Ok(rows)
    }

    fn name(&self) -> &str {
        "kraken"
    }
}

/// Extract the rows of `code` from an OHLC response body.
///
/// A non-empty `error` array wins over any result present.
pub fn parse_ohlc_response(body: &str, code: &str) -> Result<Vec<RawRow>, DataError> {
    let response: OhlcResponse =
        serde_json::from_str(body).map_err(|e| DataError::ParseError(e.to_string()))?;

    if !response.error.is_empty() {
        return Err(DataError::Api(response.error.join("; ")));
    }

    let rows = response
        .result
        .and_then(|mut result| result.remove(code))
        .ok_or_else(|| DataError::SymbolNotFound(code.to_string()))?;

    serde_json::from_value(rows).map_err(|e| DataError::ParseError(e.to_string()))
}

/// Replay a saved Kraken OHLC response from disk.
pub async fn load_kraken_json(
    path: impl AsRef<Path>,
    pair: AssetPair,
) -> Result<Vec<RawRow>, DataError> {
    let path = path.as_ref();
    let body = tokio::fs::read_to_string(path).await?;
    let rows = parse_ohlc_response(&body, pair.kraken_code())?;
    debug!(path = %path.display(), rows = rows.len(), "loaded Kraken response file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use ta_core::types::RawField;

    const BODY: &str = r#"{
        "error": [],
        "result": {
            "XXBTZUSD": [
                [1700000000, "37000.1", "37100.0", "36950.5", "37050.0", "37020.3", "12.50000000", 640],
                [1700003600, "37050.0", "37200.0", "37000.0", "37150.2", "37110.9", "8.25000000", 512]
            ],
            "last": 1700003600
        }
    }"#;

    #[test]
    fn test_parse_rows() {
        let rows = parse_ohlc_response(BODY, "XXBTZUSD").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 8);
        assert_eq!(rows[0][0], RawField::Int(1_700_000_000));
        assert_eq!(rows[0][4], RawField::Text("37050.0".to_string()));
        assert_eq!(rows[1][7], RawField::Int(512));
    }

    #[test]
    fn test_api_error() {
        let body = r#"{"error": ["EQuery:Unknown asset pair"]}"#;
        let err = parse_ohlc_response(body, "XXBTZUSD").unwrap_err();
        assert!(matches!(err, DataError::Api(msg) if msg.contains("Unknown asset pair")));
    }

    #[test]
    fn test_missing_pair_key() {
        let err = parse_ohlc_response(BODY, "XETHZUSD").unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound(code) if code == "XETHZUSD"));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_ohlc_response("<html>", "XXBTZUSD"),
            Err(DataError::ParseError(_))
        ));
        // Pair key holding something other than rows
        let body = r#"{"error": [], "result": {"XXBTZUSD": 5}}"#;
        assert!(matches!(
            parse_ohlc_response(body, "XXBTZUSD"),
            Err(DataError::ParseError(_))
        ));
    }

    #[test]
    fn test_ohlc_url() {
        let client =
            KrakenClient::new("https://api.kraken.com/", Duration::from_secs(5), "test").unwrap();
        assert_eq!(
            client.ohlc_url(AssetPair::EthUsd, Interval::Hour4),
            "https://api.kraken.com/0/public/OHLC?pair=XETHZUSD&interval=240"
        );
    }

    #[tokio::test]
    async fn test_load_kraken_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BODY.as_bytes()).unwrap();

        let rows = load_kraken_json(file.path(), AssetPair::BtcUsd).await.unwrap();
        assert_eq!(rows.len(), 2);

        let err = load_kraken_json(file.path(), AssetPair::SolUsd)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_kraken_json("/nonexistent/ohlc.json", AssetPair::BtcUsd)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
