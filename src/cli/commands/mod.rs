//! CLI command implementations.

pub mod analyze;
pub mod pairs;
pub mod validate;
