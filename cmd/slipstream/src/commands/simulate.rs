//! Simulate command implementation.

use super::load_and_simulate;
use crate::BattleArgs;
use anyhow::Result;
use tracing::info;

/// Runs the simulate command.
pub fn run(args: &BattleArgs, format: &str) -> Result<()> {
    let battle = load_and_simulate(args)?;
    let result = &battle.result;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        "text" => {
            info!(
                "Simulated {} laps from lap {}",
                result.laps_simulated(),
                battle.params.start_lap
            );
            if let Some(lap) = result.overtake_lap {
                info!(
                    "Overtake: {} gets ahead of {} on lap {}",
                    args.pursuer, args.target, lap
                );
            } else {
                info!(
                    "No overtake: {} never gets ahead of {}",
                    args.pursuer, args.target
                );
            }
            info!("Final gap: {:.3}s", result.final_gap);
            info!(
                "Closest approach: {:.3}s",
                result.summary.closest_approach
            );
        }
        other => {
            anyhow::bail!("Unknown format '{other}' (expected text or json)");
        }
    }

    Ok(())
}
