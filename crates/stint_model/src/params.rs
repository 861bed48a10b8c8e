//! Simulation parameters for a battle scenario.
//!
//! Parameters are validated when built; the simulator itself assumes
//! they are well-formed and performs no further checks.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default dirty air penalty in seconds per lap.
pub const DEFAULT_DIRTY_AIR_PENALTY: f64 = 0.15;

/// Default tire decay rate in seconds per lap.
pub const DEFAULT_TIRE_DECAY_RATE: f64 = 0.05;

/// Validated parameters for one gap simulation.
///
/// Both penalties are charged to the *target* (the leading car): dirty
/// air as a constant cost of defending, tire decay growing linearly
/// with laps elapsed since `start_lap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// First lap number included in the simulation.
    pub start_lap: u32,
    /// Gap in seconds at the start of `start_lap`; positive means the
    /// pursuer is behind the target.
    pub initial_gap: f64,
    /// Constant penalty in seconds added to the target's lap time.
    pub dirty_air_penalty: f64,
    /// Additional penalty in seconds per elapsed lap added to the
    /// target's lap time.
    pub tire_decay_rate: f64,
}

impl SimulationParameters {
    /// Creates parameters with the default penalty model.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_lap` is zero or `initial_gap` is not
    /// finite.
    pub fn new(start_lap: u32, initial_gap: f64) -> Result<Self> {
        Self {
            start_lap,
            initial_gap,
            dirty_air_penalty: DEFAULT_DIRTY_AIR_PENALTY,
            tire_decay_rate: DEFAULT_TIRE_DECAY_RATE,
        }
        .validated()
    }

    /// Sets the dirty air penalty.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not finite.
    pub fn with_dirty_air_penalty(mut self, penalty: f64) -> Result<Self> {
        self.dirty_air_penalty = penalty;
        self.validated()
    }

    /// Sets the tire decay rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not finite.
    pub fn with_tire_decay_rate(mut self, rate: f64) -> Result<Self> {
        self.tire_decay_rate = rate;
        self.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.start_lap == 0 {
            return Err(Error::NonPositiveStartLap(self.start_lap));
        }
        check_finite("initial_gap", self.initial_gap)?;
        check_penalty("dirty_air_penalty", self.dirty_air_penalty)?;
        check_penalty("tire_decay_rate", self.tire_decay_rate)?;
        Ok(self)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { name, value })
    }
}

fn check_penalty(name: &'static str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(Error::NegativePenalty { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_penalty_model() {
        let params = SimulationParameters::new(52, 2.6).unwrap();
        assert!((params.dirty_air_penalty - 0.15).abs() < f64::EPSILON);
        assert!((params.tire_decay_rate - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_start_lap_rejected() {
        assert!(matches!(
            SimulationParameters::new(0, 1.0),
            Err(Error::NonPositiveStartLap(0))
        ));
    }

    #[test]
    fn non_finite_gap_rejected() {
        assert!(matches!(
            SimulationParameters::new(1, f64::NAN),
            Err(Error::NonFinite { name: "initial_gap", .. })
        ));
    }

    #[test]
    fn negative_penalty_rejected() {
        let result = SimulationParameters::new(1, 1.0)
            .unwrap()
            .with_dirty_air_penalty(-0.1);
        assert!(matches!(
            result,
            Err(Error::NegativePenalty { name: "dirty_air_penalty", .. })
        ));
    }

    #[test]
    fn negative_decay_rejected() {
        let result = SimulationParameters::new(1, 1.0)
            .unwrap()
            .with_tire_decay_rate(-0.01);
        assert!(matches!(
            result,
            Err(Error::NegativePenalty { name: "tire_decay_rate", .. })
        ));
    }

    #[test]
    fn zero_penalties_are_valid() {
        let params = SimulationParameters::new(1, 0.0)
            .unwrap()
            .with_dirty_air_penalty(0.0)
            .unwrap()
            .with_tire_decay_rate(0.0)
            .unwrap();
        assert!((params.dirty_air_penalty).abs() < f64::EPSILON);
        assert!((params.tire_decay_rate).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_initial_gap_is_valid() {
        // Pursuer already ahead at the start of the window.
        let params = SimulationParameters::new(10, -1.2).unwrap();
        assert!((params.initial_gap + 1.2).abs() < f64::EPSILON);
    }
}
