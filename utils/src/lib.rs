//! Shared utilities for the souffl3 wallet toolkit.

pub mod logging;
pub mod units;

pub use logging::{init_logging, LogFormat};
pub use units::format_sui;
