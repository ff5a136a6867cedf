//! Error categorization.
//!
//! Maps `reqwest` failures onto the fetch failure taxonomy.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Timeouts are checked first because a timed-out request also reports itself
/// as a request or body error. Builder errors (for example an unparsable URL)
/// are not network failures and fall into `Other`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_builder() {
        FetchErrorKind::Other
    } else if error.is_status()
        || error.is_connect()
        || error.is_request()
        || error.is_redirect()
        || error.is_body()
        || error.is_decode()
    {
        FetchErrorKind::Http
    } else {
        FetchErrorKind::Other
    }
}
