//! Core types and traits for the indicator engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (RawRow, PriceBar, Series)
//! - Signal states and the asset pair / interval catalog
//! - Core traits for indicators and data sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{InsufficientHistoryWarning, MalformedRowError, TaError, TaResult};
pub use types::*;
pub use traits::*;
