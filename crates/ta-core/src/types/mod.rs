//! Core data types for the indicator engine.

mod interval;
mod ohlcv;
mod pair;
mod series;
mod signal;

pub use interval::Interval;
pub use ohlcv::{PriceBar, RawField, RawRow, RAW_ROW_FIELDS};
pub use pair::AssetPair;
pub use series::{Column, DecoratedRow, Series};
pub use signal::{SignalSide, SignalState};
