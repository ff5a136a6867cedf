//! Processing statistics tracking.
//!
//! This module provides thread-safe counters of fetch failures per category.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Thread-safe processing statistics tracker.
///
/// Counts failed fetches per `FetchErrorKind` using atomic counters, so the
/// tracker can be shared across tasks behind an `Arc`. Every kind is
/// initialized to zero on creation.
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<FetchErrorKind, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = FetchErrorKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        ProcessingStats { errors }
    }

    /// Increment the counter for a failure category.
    pub fn increment_error(&self, kind: FetchErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a failure category.
    pub fn get_error_count(&self, kind: FetchErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all categories.
    pub fn total_errors(&self) -> usize {
        FetchErrorKind::iter().map(|k| self.get_error_count(k)).sum()
    }
}
