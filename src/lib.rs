//! page_loader library: concurrent page loading with keyboard cancellation
//!
//! This library loads a list of web pages concurrently over one shared HTTP
//! client, counts the characters of every body, and renders a report of
//! successes and failures. A background watcher cancels the run when the user
//! presses Space.
//!
//! # Example
//!
//! ```no_run
//! use page_loader::{render, run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_batch(Config::default()).await?;
//! print!("{}", render(&report.results));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a multi-threaded Tokio runtime: the keyboard watcher
//! runs on a blocking thread next to the fetch tasks.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;
mod run;

// Re-export public API
pub use config::{Config, FetchMode, LogFormat, LogLevel, ReportFormat};
pub use error_handling::{FetchErrorKind, InitializationError};
pub use fetch::{FetchOutcome, FetchResult, HttpFetcher, PageFetcher};
pub use report::{render, render_json, summarize, Summary};
pub use run::{run_all, run_all_parallel, run_batch, run_pages, Batch, RunReport};
