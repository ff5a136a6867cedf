//! Graceful shutdown handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Stops the background keyboard watcher.
///
/// Cancels `shutdown` (the parent of the run's cancellation token) and waits
/// for the watcher thread to notice. Returns `true` if the watcher had
/// cancelled the run itself.
pub async fn shutdown_gracefully(
    shutdown: CancellationToken,
    watcher: Option<JoinHandle<bool>>,
) -> bool {
    shutdown.cancel();
    match watcher {
        Some(handle) => match handle.await {
            Ok(cancelled_by_key) => cancelled_by_key,
            Err(e) => {
                log::warn!("Keyboard watcher task failed: {e}");
                false
            }
        },
        None => false,
    }
}
