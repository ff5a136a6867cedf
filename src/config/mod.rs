//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (built-in URL list, timeouts, report layout)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FetchMode, LogFormat, LogLevel, ReportFormat};
