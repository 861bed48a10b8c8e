//! The gap-evolution recurrence.
//!
//! Walks two aligned stints lap by lap, charging the target a dirty
//! air penalty plus a linearly growing tire decay penalty, and records
//! the first lap after which the gap turns negative.

use crate::align::align;
use crate::error::Result;
use crate::result::{BattleSummary, SimulationResult};
use crate::trajectory::GapTrajectory;
use stint_model::{LapTimeSeries, SimulationParameters};
use tracing::debug;

/// Simulator for one battle scenario.
///
/// Parameters are validated at construction by
/// [`SimulationParameters`]; the recurrence itself only rejects empty
/// input. Each call is independent and deterministic.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: SimulationParameters,
}

impl Simulator {
    /// Creates a simulator with the given parameters.
    #[must_use]
    pub const fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Returns the configured parameters.
    #[must_use]
    pub const fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Simulates the gap evolution between pursuer and target.
    ///
    /// Both series are truncated to their common lap count first. The
    /// overtake latch is one-shot: the first lap after which the gap
    /// goes negative is recorded and never revisited, even if the gap
    /// later recovers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InsufficientData`] if either series is
    /// empty.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn simulate(
        &self,
        pursuer: &LapTimeSeries,
        target: &LapTimeSeries,
    ) -> Result<SimulationResult> {
        let (pursuer_times, target_times) = align(pursuer, target)?;
        let n = pursuer_times.len();
        let params = &self.params;
        debug!(
            start_lap = params.start_lap,
            initial_gap = params.initial_gap,
            dirty_air = params.dirty_air_penalty,
            tire_decay = params.tire_decay_rate,
            laps = n,
            "running gap simulation"
        );

        let mut gaps = Vec::with_capacity(n + 1);
        gaps.push(params.initial_gap);

        let mut current_gap = params.initial_gap;
        let mut overtake_lap: Option<u32> = None;

        for (i, (&pursuer_time, &target_time)) in
            pursuer_times.iter().zip(target_times.iter()).enumerate()
        {
            // Penalties are charged to the target: constant dirty air
            // plus decay growing with laps elapsed since start_lap.
            let simulated_target = target_time
                + params.dirty_air_penalty
                + i as f64 * params.tire_decay_rate;

            // Time the target loses (or gains) on the pursuer this lap.
            let delta = simulated_target - pursuer_time;
            current_gap -= delta;

            if current_gap < 0.0 && overtake_lap.is_none() {
                // The crossing is attributed to the lap just completed.
                overtake_lap = Some(params.start_lap + i as u32);
            }

            gaps.push(current_gap);
        }

        let trajectory = GapTrajectory::from_gaps(params.start_lap, gaps);
        let summary = BattleSummary::from_trajectory(&trajectory);

        Ok(SimulationResult {
            final_gap: current_gap,
            overtake_occurred: overtake_lap.is_some(),
            overtake_lap,
            trajectory,
            summary,
        })
    }
}
