//! Page fetching.
//!
//! One fetch is one HTTP GET. Every failure is recovered here and turned into
//! a failed [`FetchResult`]; nothing propagates to the caller.

mod result;

use std::future::Future;
use std::sync::Arc;

use log::{info, warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::app::validate_url;
use crate::error_handling::{categorize_reqwest_error, FetchErrorKind};

pub use result::{FetchOutcome, FetchResult};

/// Something that can load a page and report the outcome.
///
/// Implementations must never panic on network failures and must observe
/// `cancel` at their suspension points.
pub trait PageFetcher: Send + Sync {
    fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = FetchResult> + Send;
}

/// Fetcher backed by the shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = FetchResult> + Send {
        fetch_page(&self.client, url, cancel)
    }
}

/// Loads `url` once and counts the characters of its body in UTF-16 code units.
///
/// The request is raced against `cancel`; an empty body is logged but still
/// counts as a success with zero characters.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    cancel: &CancellationToken,
) -> FetchResult {
    if cancel.is_cancelled() {
        info!("Skipping {url}: run was cancelled");
        return FetchResult::failed(
            url,
            FetchErrorKind::Cancelled,
            "run cancelled before the request started",
        );
    }

    let target = match validate_url(url) {
        Ok(target) => target,
        Err(reason) => {
            warn!("General error for {url}: {reason}");
            return FetchResult::failed(url, FetchErrorKind::Other, reason);
        }
    };

    info!("Loading: {url}");

    let body = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("Cancelled while loading {url}");
            return FetchResult::failed(url, FetchErrorKind::Cancelled, "request aborted by user");
        }
        body = download_body(client, target) => body,
    };

    match body {
        Ok(text) => {
            // UTF-16 code units, so a character outside the BMP counts as two
            let char_count = text.encode_utf16().count();
            if char_count == 0 {
                warn!("Loaded {url} but the response body was empty");
            }
            info!("Loaded: {url} - [{char_count} characters]");
            FetchResult::loaded(url, char_count)
        }
        Err(e) => {
            let kind = categorize_reqwest_error(&e);
            match kind {
                FetchErrorKind::Timeout => warn!("Timeout for {url}: {e}"),
                FetchErrorKind::Http => warn!("HTTP error for {url}: {e}"),
                _ => warn!("General error for {url}: {e}"),
            }
            FetchResult::failed(url, kind, e)
        }
    }
}

async fn download_body(client: &reqwest::Client, url: Url) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}
