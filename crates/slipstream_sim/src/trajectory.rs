//! Gap trajectory produced by a simulation.

use serde::{Deserialize, Serialize};

/// The simulated gap at every lap boundary.
///
/// Entry 0 is the initial gap before any lap is walked, so a
/// trajectory over `n` laps holds `n + 1` values. Positive means the
/// pursuer is behind the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapTrajectory {
    /// Lap number the first entry corresponds to.
    start_lap: u32,
    /// Gap values in seconds, one per lap boundary.
    gaps: Vec<f64>,
}

impl GapTrajectory {
    /// Creates a trajectory from raw boundary gaps.
    #[must_use]
    pub const fn from_gaps(start_lap: u32, gaps: Vec<f64>) -> Self {
        Self { start_lap, gaps }
    }

    /// Returns the gap values, one per lap boundary.
    #[must_use]
    pub fn gaps(&self) -> &[f64] {
        &self.gaps
    }

    /// Returns the number of lap boundaries (lap count + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Returns true if the trajectory holds no boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Returns the lap number of the first boundary.
    #[must_use]
    pub const fn start_lap(&self) -> u32 {
        self.start_lap
    }

    /// Returns the gap before any lap was walked.
    #[must_use]
    pub fn initial_gap(&self) -> Option<f64> {
        self.gaps.first().copied()
    }

    /// Returns the gap after the final lap.
    #[must_use]
    pub fn final_gap(&self) -> Option<f64> {
        self.gaps.last().copied()
    }

    /// Returns the smallest gap reached anywhere on the trajectory.
    #[must_use]
    pub fn min_gap(&self) -> Option<f64> {
        self.gaps
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Returns the lap number for every boundary, aligned with
    /// [`Self::gaps`].
    #[must_use]
    pub fn lap_numbers(&self) -> Vec<u32> {
        (self.start_lap..).take(self.gaps.len()).collect()
    }

    /// Returns the zero-based lap offset after which the gap first
    /// went negative, if it ever did.
    #[must_use]
    pub fn first_crossing_index(&self) -> Option<usize> {
        self.gaps.iter().skip(1).position(|&g| g < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GapTrajectory {
        GapTrajectory::from_gaps(52, vec![2.6, 1.4, 0.3, -0.5, 0.1])
    }

    #[test]
    fn boundary_accessors() {
        let trajectory = sample();
        assert_eq!(trajectory.len(), 5);
        assert_eq!(trajectory.start_lap(), 52);
        assert_eq!(trajectory.initial_gap(), Some(2.6));
        assert_eq!(trajectory.final_gap(), Some(0.1));
        assert_eq!(trajectory.min_gap(), Some(-0.5));
    }

    #[test]
    fn lap_numbers_align_with_gaps() {
        let trajectory = sample();
        assert_eq!(trajectory.lap_numbers(), vec![52, 53, 54, 55, 56]);
    }

    #[test]
    fn first_crossing_is_first_negative_boundary() {
        // Gap dips negative after the third lap and recovers; only the
        // first crossing counts.
        let trajectory = sample();
        assert_eq!(trajectory.first_crossing_index(), Some(2));
    }

    #[test]
    fn no_crossing_without_negative_gap() {
        let trajectory = GapTrajectory::from_gaps(1, vec![2.0, 1.5, 0.2]);
        assert_eq!(trajectory.first_crossing_index(), None);
    }

    #[test]
    fn negative_initial_gap_is_not_a_crossing() {
        // The pursuer starting ahead is a precondition, not an event.
        let trajectory = GapTrajectory::from_gaps(1, vec![-0.3, 0.4, 0.8]);
        assert_eq!(trajectory.first_crossing_index(), None);
    }
}
