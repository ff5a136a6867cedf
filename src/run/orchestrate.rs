//! Fetch orchestration.
//!
//! Both launch strategies run every fetch on its own tokio task and gather the
//! results back in URL list order, whatever order the fetches finish in.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchResult, PageFetcher};

/// Results of one orchestrated batch.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// One result per attempted URL whose task completed, in URL list order
    pub results: Vec<FetchResult>,
    /// URLs a fetch was launched for
    pub attempted: usize,
}

type InFlight = (String, JoinHandle<FetchResult>);

fn spawn_fetch<F: PageFetcher + 'static>(
    fetcher: &Arc<F>,
    url: &str,
    cancel: &CancellationToken,
) -> InFlight {
    let fetcher = Arc::clone(fetcher);
    let task_url = url.to_string();
    let cancel = cancel.clone();
    let handle = tokio::spawn(async move { fetcher.fetch(&task_url, &cancel).await });
    (url.to_string(), handle)
}

async fn collect_in_order(in_flight: Vec<InFlight>) -> Batch {
    let attempted = in_flight.len();
    let (urls, handles): (Vec<String>, Vec<JoinHandle<FetchResult>>) =
        in_flight.into_iter().unzip();

    // join_all yields outputs in input order, whatever order tasks finish in
    let results = join_all(handles)
        .await
        .into_iter()
        .zip(urls)
        .filter_map(|(joined, url)| match joined {
            Ok(result) => Some(result),
            Err(join_error) => {
                warn!(
                    "Fetch task for {} failed, leaving it out of the results: {:?}",
                    url, join_error
                );
                None
            }
        })
        .collect();

    Batch { results, attempted }
}

/// Launches one fetch per URL in list order, `delay` apart.
///
/// The token is checked before every launch and the delay is raced against
/// it. Once it fires no further fetch starts; fetches already running finish,
/// time out, or observe the token themselves. A token cancelled before the
/// first launch yields an empty batch.
pub async fn run_all<F: PageFetcher + 'static>(
    fetcher: Arc<F>,
    urls: &[String],
    cancel: &CancellationToken,
    delay: Duration,
) -> Batch {
    let mut in_flight = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {}
            }
        }
        if cancel.is_cancelled() {
            info!(
                "Cancelled: {} of {} URLs were not started",
                urls.len() - index,
                urls.len()
            );
            break;
        }
        in_flight.push(spawn_fetch(&fetcher, url, cancel));
    }

    collect_in_order(in_flight).await
}

/// Launches every fetch at once and waits for all of them.
///
/// Nothing stops launches here: with a cancelled token every fetch still
/// produces its own (cancelled) result.
pub async fn run_all_parallel<F: PageFetcher + 'static>(
    fetcher: Arc<F>,
    urls: &[String],
    cancel: &CancellationToken,
) -> Batch {
    let in_flight = urls
        .iter()
        .map(|url| spawn_fetch(&fetcher, url, cancel))
        .collect();
    collect_in_order(in_flight).await
}
