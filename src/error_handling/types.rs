//! Error type definitions.
//!
//! This module defines the failure taxonomy for page fetches and the errors
//! raised while setting up shared resources.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Category of a failed page fetch.
///
/// Every failure is recovered at the fetch boundary and labeled with one of
/// these categories. The label prefix is what the report shows in front of the
/// underlying error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// Network or HTTP protocol failure (connect, non-2xx status, body, decode)
    Http,
    /// The request exceeded the client timeout
    Timeout,
    /// The run was cancelled before or during the fetch
    Cancelled,
    /// Anything else (invalid URL, builder errors, uncategorized)
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    /// Human-readable name used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Http => "HTTP error",
            FetchErrorKind::Timeout => "Timeout",
            FetchErrorKind::Cancelled => "Cancelled",
            FetchErrorKind::Other => "General error",
        }
    }

    /// Prefix placed in front of the error message of a failed result.
    pub fn prefix(&self) -> &'static str {
        match self {
            FetchErrorKind::Http => "HTTP Error: ",
            FetchErrorKind::Timeout => "Timeout: ",
            FetchErrorKind::Cancelled => "Cancelled: ",
            FetchErrorKind::Other => "Error: ",
        }
    }

    /// Builds the labeled message for a failure of this kind.
    pub fn label(&self, detail: impl std::fmt::Display) -> String {
        format!("{}{}", self.prefix(), detail)
    }
}
