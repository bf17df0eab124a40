//! Contact Manager - Main entry point
//!
//! Loads a `first,last,phone` record file into a fresh contact store and
//! prints the accepted contacts as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_manager::import;
use contact_manager::{Config, ContactRepository, InMemoryContactRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Importing contacts from {}", config.contacts_file.display());
    let lines = import::load_record_lines(&config.contacts_file)?;

    let repo = InMemoryContactRepository::new();
    let summary = match import::add_records(&repo, lines, config.strict_import).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Import aborted: {}", e);
            return Err(e).context("strict import stopped at the first rejected record");
        }
    };

    let contacts = repo.get_all_contacts().await;
    println!("{}", serde_json::to_string_pretty(&contacts)?);

    info!(
        "Import complete: {} accepted, {} rejected",
        summary.accepted, summary.rejected
    );
    Ok(())
}
