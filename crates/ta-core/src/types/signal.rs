//! Per-position trade signal markers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a signal column at one position.
///
/// There is no "explicitly false" state: a position either triggered or
/// was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    #[default]
    Unset,
    Triggered,
}

impl SignalState {
    #[inline]
    pub fn is_triggered(&self) -> bool {
        matches!(self, SignalState::Triggered)
    }

    /// Presentation flag: `Some(1)` when triggered, `None` otherwise.
    #[inline]
    pub fn as_flag(&self) -> Option<u8> {
        match self {
            SignalState::Triggered => Some(1),
            SignalState::Unset => None,
        }
    }
}

/// Which signal column a classifier pass writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSide {
    Buy,
    Sell,
}

impl SignalSide {
    /// Column name of this side.
    pub fn column_name(&self) -> &'static str {
        match self {
            SignalSide::Buy => "buy_signal",
            SignalSide::Sell => "sell_signal",
        }
    }
}

impl fmt::Display for SignalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalSide::Buy => write!(f, "buy"),
            SignalSide::Sell => write!(f, "sell"),
        }
    }
}
