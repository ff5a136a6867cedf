//! Result report rendering.
//!
//! Rendering is pure: the caller decides where the text goes.

use std::fmt::Write;

use serde::Serialize;

use crate::config::{
    REPORT_COUNT_WIDTH, REPORT_PLACEHOLDER, REPORT_RULE_WIDTH, REPORT_STATUS_WIDTH,
    REPORT_URL_WIDTH,
};
use crate::fetch::FetchResult;

/// Totals over one set of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Results with a loaded body
    pub successful: usize,
    /// All results (every attempted URL)
    pub total: usize,
    /// Sum of character counts over successful results
    pub total_chars: usize,
}

/// Counts successes and sums their character counts.
pub fn summarize(results: &[FetchResult]) -> Summary {
    let successful = results.iter().filter(|r| r.success()).count();
    let total_chars = results.iter().filter_map(FetchResult::char_count).sum();
    Summary {
        successful,
        total: results.len(),
        total_chars,
    }
}

fn status_label(success: bool) -> &'static str {
    if success {
        "True"
    } else {
        "False"
    }
}

fn row(
    out: &mut String,
    url: &str,
    count: &dyn std::fmt::Display,
    status: &dyn std::fmt::Display,
) {
    let _ = writeln!(
        out,
        "{:<url_w$} {:<count_w$} {:<status_w$}",
        url,
        count.to_string(),
        status.to_string(),
        url_w = REPORT_URL_WIDTH,
        count_w = REPORT_COUNT_WIDTH,
        status_w = REPORT_STATUS_WIDTH,
    );
}

/// Renders results as a fixed-width table followed by the summary lines.
///
/// Successful rows come first, then failed rows, each group in input order.
/// Every failed row is followed by its error message.
pub fn render(results: &[FetchResult]) -> String {
    let rule = "-".repeat(REPORT_RULE_WIDTH);
    let mut out = String::new();

    row(&mut out, "URL", &"Characters", &"Status");
    let _ = writeln!(out, "{rule}");

    for result in results.iter().filter(|r| r.success()) {
        let count = result.char_count().unwrap_or_default();
        row(&mut out, result.url(), &count, &status_label(true));
    }
    for result in results.iter().filter(|r| !r.success()) {
        row(&mut out, result.url(), &REPORT_PLACEHOLDER, &status_label(false));
        if let Some(message) = result.error_message() {
            let _ = writeln!(out, "    Error: [{message}]");
        }
    }

    let summary = summarize(results);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Successfully loaded: {} of {}",
        summary.successful, summary.total
    );
    let _ = writeln!(out, "Total characters: {}", summary.total_chars);
    out
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    results: &'a [FetchResult],
    summary: Summary,
}

/// Renders results and summary as a pretty-printed JSON document.
pub fn render_json(results: &[FetchResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportDocument {
        results,
        summary: summarize(results),
    })
}
