//! URL validation utilities.

use crate::config::MAX_URL_LENGTH;

/// Validates a URL before it is requested.
///
/// Rejects URLs longer than `MAX_URL_LENGTH`, URLs that do not parse, and
/// schemes other than http/https.
///
/// # Returns
///
/// The parsed URL, or a short reason suitable for an error message.
pub fn validate_url(url: &str) -> Result<url::Url, String> {
    if url.len() > MAX_URL_LENGTH {
        return Err(format!(
            "URL exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        ));
    }

    let parsed = url::Url::parse(url).map_err(|e| format!("invalid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(format!("unsupported scheme: {other}")),
    }
}
