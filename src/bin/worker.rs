//! Swingrix Worker
//!
//! One-shot daily screening run: reads a prepared snapshot universe from a
//! JSON file, evaluates it for the target date and writes the serialized
//! report to stdout or `REPORT_FILE`. Snapshot collection and report
//! persistence live outside this binary.

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use swingrix::config::{get_environment, ScreeningConfig};
use swingrix::engine::ScreeningEngine;
use swingrix::logging;
use swingrix::report::ScreeningReport;
use swingrix::services::market_data::StaticSnapshotProvider;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let environment = get_environment();
    info!("Starting Swingrix Worker");
    info!(environment = %environment, "Environment");

    let snapshot_file =
        env::var("SNAPSHOT_FILE").map_err(|_| "SNAPSHOT_FILE must point at a snapshot JSON file")?;

    let as_of = match env::var("AS_OF_DATE") {
        Ok(raw) => raw.parse()?,
        Err(_) => chrono::Local::now().date_naive(),
    };

    let config = ScreeningConfig::from_env();
    info!(
        %as_of,
        top_n = config.top_n,
        concurrency = config.concurrency,
        "Run configuration"
    );

    let provider = StaticSnapshotProvider::from_json_file(&snapshot_file)?;
    info!(snapshots = provider.len(), file = %snapshot_file, "Snapshots loaded");

    let engine = ScreeningEngine::new(Arc::new(provider), config);
    let run = engine.run(as_of).await;
    let report = ScreeningReport::from(&run);
    let json = serde_json::to_string_pretty(&report)?;

    match env::var("REPORT_FILE") {
        Ok(path) => {
            std::fs::write(&path, json)?;
            info!(path = %path, "Report written");
        }
        Err(_) => println!("{json}"),
    }

    Ok(())
}
