//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_loader` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the report, waiting for the exit key and clearing the screen
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use page_loader::app::{clear_screen, is_interactive, wait_for_any_key};
use page_loader::initialization::init_logger_with;
use page_loader::{render, render_json, run_batch, Config, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; it only supplies optional overrides such as RUST_LOG
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    println!("Starting async web page loading...\n");

    let report_format = config.report_format;
    let no_wait = config.no_wait;

    match run_batch(config).await {
        Ok(report) => {
            let rendered = match report_format {
                ReportFormat::Table => Ok(render(&report.results)),
                ReportFormat::Json => render_json(&report.results),
            };
            match rendered {
                Ok(text) => {
                    println!("\nLoading results:\n");
                    print!("{text}");
                    if report.cancelled {
                        println!(
                            "(cancelled: {} of {} URLs attempted)",
                            report.attempted, report.total_urls
                        );
                    }
                }
                Err(e) => eprintln!("Critical error! {e}"),
            }
        }
        Err(e) => eprintln!("Critical error! {e:#}"),
    }

    if !no_wait && is_interactive() {
        println!("\nPress any key to exit...");
        match tokio::task::spawn_blocking(wait_for_any_key).await {
            Ok(Ok(())) => {
                if let Err(e) = clear_screen() {
                    log::warn!("Could not clear the screen: {e}");
                }
            }
            Ok(Err(e)) => log::warn!("Could not read the exit key: {e}"),
            Err(e) => log::warn!("Exit key task failed: {e}"),
        }
    }

    Ok(())
}
