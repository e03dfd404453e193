//! Logging setup and plain-text presentation.

mod logging;
mod preview;

pub use logging::setup_logging;
pub use preview::{render_preview, signal_summary};
