//! # tempcalcd — tempcalc selection runner
//!
//! Composition root that wires the snapshot adapter into the application
//! services and prints one selection run as JSON.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Load the state dump and area registry (the only async edge)
//! - Build the options form (candidates, indoor defaults, outdoor guesses)
//! - Validate previously saved options, if any, against the fresh snapshot
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::Path;

use serde::Serialize;
use tempcalc_adapter_snapshot_json::JsonSnapshot;
use tempcalc_app::services::options_service::OptionsService;
use tempcalc_domain::error::TempCalcError;
use tempcalc_domain::options::{FieldError, RoomOptions};
use tempcalc_domain::selection::Selection;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, SnapshotConfig};

/// What gets printed on stdout.
#[derive(Debug, Serialize)]
struct Report {
    selection: Selection,
    defaults: RoomOptions,
    /// Field errors of the saved options; absent when none were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<Vec<FieldError>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    // Snapshot
    let snapshot = load_snapshot(&config.snapshot).await?;

    // Saved options
    let saved = match &config.options.previous {
        Some(path) => Some(load_options(path).await?),
        None => None,
    };
    let previous = config.selection.constrain(saved.clone());

    // Services
    let service = OptionsService::new(&snapshot, &snapshot, config.selection.strategy);
    let form = service.form(previous.as_ref());
    let field_errors = saved.map(|options| match service.submit(options) {
        Ok(_) => Vec::new(),
        Err(rejected) => {
            tracing::warn!(%rejected, "saved options no longer valid");
            rejected.errors
        }
    });

    let report = Report {
        selection: form.selection,
        defaults: form.defaults,
        field_errors,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn load_snapshot(config: &SnapshotConfig) -> Result<JsonSnapshot, TempCalcError> {
    let snapshot = JsonSnapshot::load(&config.states, config.areas.as_deref()).await?;
    Ok(snapshot)
}

async fn load_options(path: &Path) -> Result<RoomOptions, Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
