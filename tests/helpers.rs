// Shared test helpers: a scripted fetcher and scripted key sources.
//
// Used by the orchestration, cancellation and integration test files.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use page_loader::app::KeySource;
use page_loader::{FetchErrorKind, FetchResult, PageFetcher};
use tokio_util::sync::CancellationToken;

/// What the scripted fetcher does for one URL.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Not every test file uses every variant
pub enum Scripted {
    /// Wait `delay` (or until cancelled), then load `chars` characters
    Body { chars: usize, delay: Duration },
    /// Fail right away with the given category
    Fail(FetchErrorKind, &'static str),
    /// Panic inside the fetch task
    Panic,
}

/// A `PageFetcher` that answers from a script and records every call.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedFetcher {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, url: &str, chars: usize) -> Self {
        self.script.insert(
            url.to_string(),
            Scripted::Body {
                chars,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn slow_body(mut self, url: &str, chars: usize, delay: Duration) -> Self {
        self.script
            .insert(url.to_string(), Scripted::Body { chars, delay });
        self
    }

    pub fn fail(mut self, url: &str, kind: FetchErrorKind, detail: &'static str) -> Self {
        self.script
            .insert(url.to_string(), Scripted::Fail(kind, detail));
        self
    }

    pub fn panic_on(mut self, url: &str) -> Self {
        self.script.insert(url.to_string(), Scripted::Panic);
        self
    }

    /// URLs `fetch` was called with, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = FetchResult> + Send {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(url.to_string());
        let script = self.script.get(url).cloned();
        let url = url.to_string();
        let cancel = cancel.clone();

        async move {
            if cancel.is_cancelled() {
                return FetchResult::failed(url, FetchErrorKind::Cancelled, "not started");
            }
            match script {
                Some(Scripted::Body { chars, delay }) => {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            FetchResult::failed(url, FetchErrorKind::Cancelled, "aborted")
                        }
                        _ = tokio::time::sleep(delay) => FetchResult::loaded(url, chars),
                    }
                }
                Some(Scripted::Fail(kind, detail)) => FetchResult::failed(url, kind, detail),
                Some(Scripted::Panic) => panic!("scripted panic for {url}"),
                None => FetchResult::failed(url, FetchErrorKind::Other, "unscripted URL"),
            }
        }
    }
}

/// Key source that never reports a key.
#[allow(dead_code)]
pub struct NoKeys;

impl KeySource for NoKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        std::thread::sleep(timeout);
        Ok(None)
    }
}

/// Key source that reports Space once `after` has elapsed since creation.
#[allow(dead_code)]
pub struct SpaceAfter {
    at: Instant,
}

#[allow(dead_code)]
impl SpaceAfter {
    pub fn new(after: Duration) -> Self {
        Self {
            at: Instant::now() + after,
        }
    }
}

impl KeySource for SpaceAfter {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if Instant::now() >= self.at {
            return Ok(Some(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
        }
        std::thread::sleep(timeout);
        Ok(None)
    }
}

/// Builds owned URL strings for the orchestrator.
#[allow(dead_code)]
pub fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|u| u.to_string()).collect()
}

/// Checks the invariants every batch must satisfy.
#[allow(dead_code)]
pub fn assert_batch_invariants(results: &[FetchResult], attempted: &[String]) {
    assert!(
        results.len() <= attempted.len(),
        "{} results for {} attempted URLs",
        results.len(),
        attempted.len()
    );
    for result in results {
        assert!(
            attempted.iter().any(|u| u == result.url()),
            "{} was never attempted",
            result.url()
        );
        if result.success() {
            assert!(result.char_count().is_some());
            assert!(result.error_message().is_none());
        } else {
            assert!(result.char_count().is_none());
            assert!(result.error_message().is_some_and(|m| !m.is_empty()));
        }
    }
}
