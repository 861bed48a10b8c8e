//! CLI subcommand implementations.

pub mod init;
pub mod report;
pub mod simulate;

use crate::BattleArgs;
use anyhow::{Context, Result};
use slipstream_sim::{SimulationResult, Simulator};
use slipstream_telemetry::Session;
use std::path::Path;
use stint_model::{LapTimeSeries, SimulationParameters};
use tracing::info;

/// A loaded and simulated battle, shared by the simulate and report
/// commands so the scenario is assembled exactly one way.
pub struct Battle {
    /// Pursuer stint in the selected window.
    pub pursuer: LapTimeSeries,
    /// Target stint in the selected window.
    pub target: LapTimeSeries,
    /// Validated scenario parameters.
    pub params: SimulationParameters,
    /// Simulation outcome.
    pub result: SimulationResult,
}

/// Loads session telemetry, selects both stints, and runs the
/// simulation.
pub fn load_and_simulate(args: &BattleArgs) -> Result<Battle> {
    let session = load_session(&args.session)?;
    info!(
        "Loaded {} laps for {} driver(s)",
        session.len(),
        session.drivers().len()
    );

    let pursuer = session
        .lap_times(&args.pursuer, args.start_lap, args.end_lap)
        .with_context(|| format!("Failed to select laps for pursuer {}", args.pursuer))?;
    let target = session
        .lap_times(&args.target, args.start_lap, args.end_lap)
        .with_context(|| format!("Failed to select laps for target {}", args.target))?;

    let params = SimulationParameters::new(args.start_lap, args.initial_gap)
        .and_then(|p| p.with_dirty_air_penalty(args.dirty_air))
        .and_then(|p| p.with_tire_decay_rate(args.tire_decay))
        .with_context(|| "Invalid simulation parameters")?;

    let result = Simulator::new(params.clone())
        .simulate(&pursuer, &target)
        .with_context(|| "Simulation failed")?;

    Ok(Battle {
        pursuer,
        target,
        params,
        result,
    })
}

fn load_session(path: &str) -> Result<Session> {
    let path = Path::new(path);

    if path.is_dir() {
        Session::load_directory(path)
            .with_context(|| format!("Failed to load session from directory: {}", path.display()))
    } else {
        Session::load_file(path)
            .with_context(|| format!("Failed to load session file: {}", path.display()))
    }
}
