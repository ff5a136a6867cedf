//! Run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FetchErrorKind, ProcessingStats};

/// Logs a one-line summary of the run.
///
/// # Arguments
///
/// * `attempted` - URLs a fetch was started for
/// * `total_urls` - URLs in the list
/// * `successful` - Fetches that loaded a body
/// * `cancelled` - Whether the user cancelled the run
/// * `elapsed_seconds` - Wall time of the run
pub fn print_simple_summary(
    attempted: usize,
    total_urls: usize,
    successful: usize,
    cancelled: bool,
    elapsed_seconds: f64,
) {
    info!(
        "Attempted {} of {} URL{} ({} succeeded, {} failed) in {:.1}s{}",
        attempted,
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        successful,
        attempted.saturating_sub(successful),
        elapsed_seconds,
        if cancelled { " - cancelled by user" } else { "" }
    );
}

/// Formats the non-zero failure counters, one line per category.
pub fn error_statistics_lines(error_stats: &ProcessingStats) -> Vec<String> {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return Vec::new();
    }

    let mut lines = vec![format!("Error Counts ({} total):", total_errors)];
    for kind in FetchErrorKind::iter() {
        let count = error_stats.get_error_count(kind);
        if count > 0 {
            lines.push(format!("   {}: {}", kind.as_str(), count));
        }
    }
    lines
}

/// Logs the failure counters per category.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    for line in error_statistics_lines(error_stats) {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statistics_lines_empty_when_no_errors() {
        let stats = ProcessingStats::new();
        assert!(error_statistics_lines(&stats).is_empty());
        print_error_statistics(&stats);
    }

    #[test]
    fn test_error_statistics_lines_only_non_zero() {
        let stats = ProcessingStats::new();
        stats.increment_error(FetchErrorKind::Timeout);
        stats.increment_error(FetchErrorKind::Timeout);
        stats.increment_error(FetchErrorKind::Http);

        let lines = error_statistics_lines(&stats);
        assert_eq!(
            lines,
            vec![
                "Error Counts (3 total):".to_string(),
                "   HTTP error: 1".to_string(),
                "   Timeout: 2".to_string(),
            ]
        );
    }

    #[test]
    fn test_print_simple_summary_does_not_panic() {
        print_simple_summary(0, 10, 0, true, 0.0);
        print_simple_summary(10, 10, 7, false, 3.25);
    }
}
