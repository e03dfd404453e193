//! Windowed technical indicators.
//!
//! This crate provides the numeric kernels behind the series builder:
//! - Simple moving average
//! - Population standard deviation and lagged volatility bands
//! - Relative strength index over simple rolling means
//!
//! Every indicator returns output aligned 1:1 with its input, with `None`
//! where the trailing window is not yet full. Window sums go through the
//! SIMD helpers in [`simd`].

pub mod momentum;
pub mod moving_average;
pub mod simd;
pub mod volatility;

pub use momentum::{rsi_from_averages, Rsi};
pub use moving_average::Sma;
pub use volatility::{BandOutput, StdDev, VolatilityBands};
