//! Report command implementation.

use super::load_and_simulate;
use crate::BattleArgs;
use anyhow::{Context, Result};
use slipstream_report::generate_battle_report;
use std::fs;
use tracing::info;

/// Runs the report command.
pub fn run(args: &BattleArgs, output_path: &str) -> Result<()> {
    let battle = load_and_simulate(args)?;

    let report = generate_battle_report(
        &battle.pursuer,
        &battle.target,
        &battle.params,
        &battle.result,
    );

    fs::write(output_path, &report)
        .with_context(|| format!("Failed to write output file: {output_path}"))?;

    info!("Battle report written to: {}", output_path);
    Ok(())
}
