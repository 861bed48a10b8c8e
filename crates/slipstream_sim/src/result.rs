//! Simulation result types.

use crate::trajectory::GapTrajectory;
use serde::{Deserialize, Serialize};

/// Result of one gap simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Gap in seconds after the final simulated lap.
    pub final_gap: f64,
    /// Whether the simulated gap ever turned negative.
    pub overtake_occurred: bool,
    /// Lap after which the gap first turned negative, if it did.
    pub overtake_lap: Option<u32>,
    /// Gap at every lap boundary, exposed for reporting.
    pub trajectory: GapTrajectory,
    /// Summary statistics over the battle.
    pub summary: BattleSummary,
}

impl SimulationResult {
    /// Returns true if the pursuer got ahead at any point.
    #[must_use]
    pub const fn is_overtake(&self) -> bool {
        self.overtake_occurred
    }

    /// Returns the number of laps that were walked.
    #[must_use]
    pub const fn laps_simulated(&self) -> usize {
        self.summary.laps_simulated
    }
}

/// Summary statistics for a simulated battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// Number of laps walked by the recurrence.
    pub laps_simulated: usize,
    /// Final gap minus initial gap; negative means the pursuer closed in.
    pub total_gap_change: f64,
    /// Average gap change per lap.
    pub mean_gap_change_per_lap: f64,
    /// Smallest gap reached anywhere on the trajectory.
    pub closest_approach: f64,
}

impl BattleSummary {
    /// Derives summary statistics from a trajectory.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_trajectory(trajectory: &GapTrajectory) -> Self {
        let laps_simulated = trajectory.len().saturating_sub(1);
        let initial = trajectory.initial_gap().unwrap_or(0.0);
        let total_gap_change = trajectory.final_gap().unwrap_or(initial) - initial;
        let mean_gap_change_per_lap = if laps_simulated == 0 {
            0.0
        } else {
            total_gap_change / laps_simulated as f64
        };

        Self {
            laps_simulated,
            total_gap_change,
            mean_gap_change_per_lap,
            closest_approach: trajectory.min_gap().unwrap_or(initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_from_trajectory() {
        let trajectory = GapTrajectory::from_gaps(10, vec![2.0, 1.2, 0.4, 0.8]);
        let summary = BattleSummary::from_trajectory(&trajectory);

        assert_eq!(summary.laps_simulated, 3);
        assert!((summary.total_gap_change + 1.2).abs() < 1e-12);
        assert!((summary.mean_gap_change_per_lap + 0.4).abs() < 1e-12);
        assert!((summary.closest_approach - 0.4).abs() < 1e-12);
    }

    #[test]
    fn summary_of_boundary_only_trajectory() {
        let trajectory = GapTrajectory::from_gaps(1, vec![1.5]);
        let summary = BattleSummary::from_trajectory(&trajectory);

        assert_eq!(summary.laps_simulated, 0);
        assert!(summary.total_gap_change.abs() < f64::EPSILON);
        assert!((summary.closest_approach - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn overtake_helpers() {
        let trajectory = GapTrajectory::from_gaps(52, vec![0.5, -0.65]);
        let result = SimulationResult {
            final_gap: -0.65,
            overtake_occurred: true,
            overtake_lap: Some(52),
            summary: BattleSummary::from_trajectory(&trajectory),
            trajectory,
        };

        assert!(result.is_overtake());
        assert_eq!(result.laps_simulated(), 1);
    }
}
