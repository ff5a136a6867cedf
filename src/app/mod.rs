//! Main application modules.
//!
//! This module provides the keyboard cancellation watcher, terminal helpers,
//! URL validation, shutdown handling, and statistics logging.

pub mod shutdown;
pub mod statistics;
pub mod terminal;
pub mod url;
pub mod watcher;

// Re-export public API
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_simple_summary};
pub use terminal::{clear_screen, is_interactive, wait_for_any_key};
pub use self::url::validate_url;
pub use watcher::{spawn_key_watcher, KeySource, TerminalKeys, CANCEL_KEY};
