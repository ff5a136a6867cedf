//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the built-in URL list, timeouts and report layout.

use std::time::Duration;

/// Pages loaded by every run, in report order.
pub const DEFAULT_URLS: &[&str] = &[
    "https://www.google.com",
    "https://www.youtube.com",
    "https://www.facebook.com",
    "https://www.twitter.com",
    "https://www.instagram.com",
    "https://www.wikipedia.org",
    "https://www.amazon.com",
    "https://www.netflix.com",
    "https://www.microsoft.com",
    "https://www.apple.com",
];

/// Default User-Agent string for HTTP requests.
///
/// Set once on the shared client when it is built. Users can override this via
/// the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// Delay between launching consecutive fetches in sequential mode
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// How often the keyboard watcher checks for the cancel key
pub const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maximum URL length accepted before a fetch is attempted
pub const MAX_URL_LENGTH: usize = 2048;

// Report layout
/// Width of the URL column
pub const REPORT_URL_WIDTH: usize = 40;
/// Width of the character count column
pub const REPORT_COUNT_WIDTH: usize = 15;
/// Width of the status column
pub const REPORT_STATUS_WIDTH: usize = 15;
/// Width of the separator rule
pub const REPORT_RULE_WIDTH: usize = 70;
/// Shown in the count column for failed fetches
pub const REPORT_PLACEHOLDER: &str = "N/A";
