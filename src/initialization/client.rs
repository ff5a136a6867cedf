//! HTTP client initialization.
//!
//! The client is built once, before any fetch starts, and shared by every
//! fetch through an `Arc`. Its default headers are fixed at build time, so
//! concurrent fetches never touch client configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the shared HTTP client from the configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    build_client(
        &config.user_agent,
        Duration::from_secs(config.timeout_seconds),
    )
}

/// Builds a client with an explicit User-Agent and timeout.
pub fn build_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}
