//! Error handling and processing statistics.
//!
//! This module provides:
//! - The fetch failure taxonomy (`FetchErrorKind`)
//! - Categorization of `reqwest` errors into that taxonomy
//! - Per-category failure counters
//! - Initialization error types

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{FetchErrorKind, InitializationError};
