//! Init command implementation.

use anyhow::{Context, Result};
use slipstream_telemetry::Session;
use std::fs;
use std::path::Path;
use tracing::info;

/// Runs the init command.
pub fn run(path: &str) -> Result<()> {
    let session_path = Path::new(path);

    if session_path.exists() {
        info!("Skipped: {} (already exists)", session_path.display());
        return Ok(());
    }

    let session = Session::example();
    let json = serde_json::to_string_pretty(&session)
        .with_context(|| "Failed to serialize example session")?;

    fs::write(session_path, json)
        .with_context(|| format!("Failed to write {}", session_path.display()))?;
    info!("Created: {}", session_path.display());

    info!("Next steps:");
    info!("  1. Inspect the drivers and lap range in the session file");
    info!(
        "  2. Run 'slipstream simulate -s {} -p NOR -t RUS --start-lap 52 --initial-gap 2.6'",
        session_path.display()
    );
    info!("  3. Run 'slipstream report' with the same scenario for a markdown write-up");

    Ok(())
}
