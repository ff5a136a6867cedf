//! Integration tests for run_pages
//!
//! These tests drive a complete run against a local HTTP server:
//! - Real HTTP fetches through the shared client
//! - Keyboard cancellation through a scripted key source
//! - Report totals over real responses

mod helpers;

use std::time::Duration;

use helpers::{assert_batch_invariants, NoKeys, SpaceAfter};
use httptest::{matchers::*, responders::*, Expectation, Server};
use page_loader::{render, run_pages, Config, FetchErrorKind, FetchMode, LogFormat, LogLevel};

/// Helper function to create a basic Config for testing
fn create_test_config(mode: FetchMode, request_delay_ms: u64) -> Config {
    Config {
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        timeout_seconds: 5,
        mode,
        request_delay_ms,
        no_wait: true,
        ..Default::default()
    }
}

fn serve_page_and_missing(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .respond_with(status_code(200).body("x".repeat(1000))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404)),
    );
}

#[tokio::test]
async fn test_parallel_run_reports_success_and_failure() {
    let server = Server::run();
    serve_page_and_missing(&server);
    let urls = vec![server.url_str("/page"), server.url_str("/missing")];

    let report = run_pages(&create_test_config(FetchMode::Parallel, 0), &urls, NoKeys)
        .await
        .expect("run should complete");

    assert!(!report.cancelled);
    assert_eq!(report.total_urls, 2);
    assert_eq!(report.attempted, 2);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].char_count(), Some(1000));
    assert_eq!(report.results[1].error_kind(), Some(FetchErrorKind::Http));
    assert_batch_invariants(&report.results, &urls);

    let text = render(&report.results);
    assert!(text.contains("Successfully loaded: 1 of 2"));
    assert!(text.contains("Total characters: 1000"));
}

#[tokio::test]
async fn test_sequential_run_matches_parallel_totals() {
    let server = Server::run();
    serve_page_and_missing(&server);
    let urls = vec![server.url_str("/page"), server.url_str("/missing")];

    let report = run_pages(&create_test_config(FetchMode::Sequential, 50), &urls, NoKeys)
        .await
        .expect("run should complete");

    let summary = report.summary();
    assert_eq!(summary.successful, 1);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.total_chars, 1000);
    assert!(!report.cancelled);
}

#[tokio::test]
async fn test_space_key_cancels_sequential_run() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .times(0..=5)
            .respond_with(status_code(200).body("hello")),
    );
    let urls: Vec<String> = (0..5).map(|_| server.url_str("/page")).collect();

    let report = run_pages(
        &create_test_config(FetchMode::Sequential, 400),
        &urls,
        SpaceAfter::new(Duration::from_millis(150)),
    )
    .await
    .expect("run should complete");

    assert!(report.cancelled);
    assert!(report.attempted < urls.len());
    assert!(report.results.len() <= report.attempted);
    assert!(report.elapsed_seconds < 3.0);
    assert_batch_invariants(&report.results, &urls);
}

#[tokio::test]
async fn test_unreachable_host_is_reported_not_raised() {
    // Port 9 (discard) is closed on test machines
    let urls = vec!["http://127.0.0.1:9/".to_string()];

    let report = run_pages(&create_test_config(FetchMode::Parallel, 0), &urls, NoKeys)
        .await
        .expect("a failed fetch is not a run error");

    assert_eq!(report.results.len(), 1);
    assert!(!report.results[0].success());
    assert!(report.results[0]
        .error_message()
        .is_some_and(|m| m.starts_with("HTTP Error: ")));
}

#[tokio::test]
async fn test_invalid_user_agent_is_a_run_error() {
    let config = Config {
        user_agent: "bad\nagent".to_string(),
        ..create_test_config(FetchMode::Parallel, 0)
    };

    let result = run_pages(&config, &["https://a.test".to_string()], NoKeys).await;

    let error = result.expect_err("client construction should fail");
    assert!(format!("{error:#}").contains("Failed to initialize HTTP client"));
}

/// Loads the real built-in page list.
#[tokio::test]
#[ignore] // Needs internet access. Run with: cargo test --test test_run_pages_integration -- --ignored
async fn test_run_batch_against_real_sites() {
    let config = create_test_config(FetchMode::Parallel, 0);
    let report = page_loader::run_batch(Config {
        timeout_seconds: 30,
        ..config
    })
    .await
    .expect("run should complete");

    assert_eq!(report.total_urls, page_loader::config::DEFAULT_URLS.len());
    assert_eq!(report.results.len(), report.total_urls);
}
