//! Asset pairs supported by the analysis tool.

use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// A tradeable pair with its Kraken pair code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetPair {
    BtcUsd,
    EthUsd,
    EthBtc,
    AdaUsd,
    DotUsd,
    SolUsd,
    XrpUsd,
    LtcUsd,
}

impl AssetPair {
    /// Human-readable name, e.g. `BTC/USD`.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetPair::BtcUsd => "BTC/USD",
            AssetPair::EthUsd => "ETH/USD",
            AssetPair::EthBtc => "ETH/BTC",
            AssetPair::AdaUsd => "ADA/USD",
            AssetPair::DotUsd => "DOT/USD",
            AssetPair::SolUsd => "SOL/USD",
            AssetPair::XrpUsd => "XRP/USD",
            AssetPair::LtcUsd => "LTC/USD",
        }
    }

    /// Kraken's pair code, used as the `pair` query parameter and as the
    /// result key of the OHLC response.
    pub fn kraken_code(&self) -> &'static str {
        match self {
            AssetPair::BtcUsd => "XXBTZUSD",
            AssetPair::EthUsd => "XETHZUSD",
            AssetPair::EthBtc => "XETHXXBT",
            AssetPair::AdaUsd => "ADAUSD",
            AssetPair::DotUsd => "DOTUSD",
            AssetPair::SolUsd => "SOLUSD",
            AssetPair::XrpUsd => "XXRPZUSD",
            AssetPair::LtcUsd => "XLTCZUSD",
        }
    }

    /// File-name friendly label, e.g. `BTCUSD`.
    pub fn slug(&self) -> String {
        self.display_name().replace('/', "")
    }

    /// Get all supported pairs, in menu order.
    pub fn all() -> &'static [AssetPair] {
        &[
            AssetPair::BtcUsd,
            AssetPair::EthUsd,
            AssetPair::EthBtc,
            AssetPair::AdaUsd,
            AssetPair::DotUsd,
            AssetPair::SolUsd,
            AssetPair::XrpUsd,
            AssetPair::LtcUsd,
        ]
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AssetPair {
    type Err = DataError;

    /// Accepts `BTC/USD`, `btcusd` or the Kraken code `XXBTZUSD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace(['/', '-', '_'], "");
        Self::all()
            .iter()
            .copied()
            .find(|pair| pair.slug() == wanted || pair.kraken_code() == wanted)
            .ok_or_else(|| DataError::SymbolNotFound(s.to_string()))
    }
}
