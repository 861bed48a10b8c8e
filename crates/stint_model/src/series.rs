//! Per-competitor lap-time series.
//!
//! A series holds real, already-selected lap times for one competitor
//! over a contiguous lap range. Values are validated at construction;
//! invalid states are unrepresentable afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of per-lap elapsed times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapTimeSeries {
    /// Lap number of the first entry.
    first_lap: u32,
    /// Elapsed time per lap, in seconds, in increasing lap order.
    times: Vec<f64>,
    /// Optional competitor identifier (e.g. a three-letter driver code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

impl LapTimeSeries {
    /// Creates a series from raw lap times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLapTime`] if any value is negative,
    /// NaN, or infinite.
    pub fn new(first_lap: u32, times: Vec<f64>) -> Result<Self> {
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidLapTime { index, value });
            }
        }
        Ok(Self {
            first_lap,
            times,
            driver: None,
        })
    }

    /// Tags the series with a competitor identifier.
    #[must_use]
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Returns the lap times in seconds.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the lap number of the first entry.
    #[must_use]
    pub const fn first_lap(&self) -> u32 {
        self.first_lap
    }

    /// Returns the number of laps in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the series holds no laps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns a copy truncated to at most `n` laps, order preserved.
    #[must_use]
    pub fn truncated(&self, n: usize) -> Self {
        let mut copy = self.clone();
        copy.times.truncate(n);
        copy
    }

    /// Returns pace statistics over the series.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> PaceStats {
        if self.times.is_empty() {
            return PaceStats::default();
        }

        let best = self.times.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = self.times.iter().copied().fold(0.0, f64::max);
        let mean = self.times.iter().sum::<f64>() / self.times.len() as f64;

        let variance = self
            .times
            .iter()
            .map(|&t| (t - mean).powi(2))
            .sum::<f64>()
            / self.times.len() as f64;

        PaceStats {
            lap_count: self.times.len(),
            best,
            worst,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Pace statistics over one stint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaceStats {
    /// Number of laps in the stint.
    pub lap_count: usize,
    /// Fastest lap time in seconds.
    pub best: f64,
    /// Slowest lap time in seconds.
    pub worst: f64,
    /// Average lap time in seconds.
    pub mean: f64,
    /// Standard deviation of lap times.
    pub std_dev: f64,
}
