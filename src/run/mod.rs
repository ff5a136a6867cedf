//! Run orchestration: wires the client, the keyboard watcher and the fetch
//! batch together and produces a [`RunReport`].

mod orchestrate;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::app::{
    print_error_statistics, print_simple_summary, shutdown_gracefully, spawn_key_watcher,
    KeySource, TerminalKeys, CANCEL_KEY,
};
use crate::config::{Config, FetchMode, DEFAULT_URLS};
use crate::error_handling::ProcessingStats;
use crate::fetch::{FetchResult, HttpFetcher};
use crate::initialization::init_client;
use crate::report::{summarize, Summary};

pub use orchestrate::{run_all, run_all_parallel, Batch};

/// Outcome of a complete run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Results in URL list order, only for attempted URLs
    pub results: Vec<FetchResult>,
    /// Number of URLs in the list
    pub total_urls: usize,
    /// Number of URLs a fetch was started for
    pub attempted: usize,
    /// Whether the user cancelled the run
    pub cancelled: bool,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        summarize(&self.results)
    }
}

/// Loads the built-in page list, watching the terminal for the cancel key.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built. Failed page loads are
/// not errors; they are part of the report.
pub async fn run_batch(config: Config) -> Result<RunReport> {
    let urls: Vec<String> = DEFAULT_URLS.iter().map(|url| url.to_string()).collect();
    run_pages(&config, &urls, TerminalKeys::new()).await
}

/// Loads `urls` with cancellation driven by `keys`.
///
/// The watcher observes a child of the run's shutdown token: pressing the
/// cancel key cancels the run, while shutting down after a natural finish only
/// stops the watcher.
pub async fn run_pages<S: KeySource>(
    config: &Config,
    urls: &[String],
    keys: S,
) -> Result<RunReport> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let fetcher = Arc::new(HttpFetcher::new(client));

    let shutdown = CancellationToken::new();
    let cancel = shutdown.child_token();
    let watcher = spawn_key_watcher(cancel.clone(), CANCEL_KEY, keys);

    info!(
        "Starting to load {} pages ({:?} mode), press Space to cancel",
        urls.len(),
        config.mode
    );
    let start_time = Instant::now();

    let batch = match config.mode {
        FetchMode::Sequential => {
            run_all(
                fetcher,
                urls,
                &cancel,
                Duration::from_millis(config.request_delay_ms),
            )
            .await
        }
        FetchMode::Parallel => run_all_parallel(fetcher, urls, &cancel).await,
    };

    let cancelled = cancel.is_cancelled();
    shutdown_gracefully(shutdown, Some(watcher)).await;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    let error_stats = ProcessingStats::new();
    for kind in batch.results.iter().filter_map(FetchResult::error_kind) {
        error_stats.increment_error(kind);
    }
    print_error_statistics(&error_stats);

    let successful = batch.results.iter().filter(|r| r.success()).count();
    print_simple_summary(
        batch.attempted,
        urls.len(),
        successful,
        cancelled,
        elapsed_seconds,
    );

    Ok(RunReport {
        results: batch.results,
        total_urls: urls.len(),
        attempted: batch.attempted,
        cancelled,
        elapsed_seconds,
    })
}
