//! Session storage and lap selection.
//!
//! A session holds every recorded lap of an event. Selection narrows
//! it to one driver and one lap range, producing the validated series
//! the simulator consumes.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stint_model::LapTimeSeries;
use tracing::warn;

/// One recorded lap for one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    /// Driver identifier (e.g. a three-letter code).
    pub driver: String,
    /// Lap number, starting at 1.
    pub lap_number: u32,
    /// Elapsed lap time in seconds.
    pub time_seconds: f64,
}

impl LapRecord {
    /// Creates a new lap record.
    #[must_use]
    pub fn new(driver: impl Into<String>, lap_number: u32, time_seconds: f64) -> Self {
        Self {
            driver: driver.into(),
            lap_number,
            time_seconds,
        }
    }
}

/// A loaded telemetry session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Optional event name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional event date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Every recorded lap in the session.
    laps: Vec<LapRecord>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with an event name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date: None,
            laps: Vec::new(),
        }
    }

    /// Adds a lap record to the session.
    pub fn add_lap(&mut self, lap: LapRecord) {
        self.laps.push(lap);
    }

    /// Returns every lap record in the session.
    #[must_use]
    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }

    /// Returns the number of lap records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.laps.len()
    }

    /// Returns true if the session holds no laps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// Returns the distinct drivers in the session, sorted.
    #[must_use]
    pub fn drivers(&self) -> Vec<String> {
        let mut drivers: Vec<String> = self.laps.iter().map(|l| l.driver.clone()).collect();
        drivers.sort();
        drivers.dedup();
        drivers
    }

    /// Returns true if the session has laps for the given driver.
    #[must_use]
    pub fn has_driver(&self, driver: &str) -> bool {
        self.laps
            .iter()
            .any(|l| l.driver.eq_ignore_ascii_case(driver))
    }

    /// Selects one driver's laps within a lap range as a validated
    /// series.
    ///
    /// Laps are sorted by lap number; duplicates keep the first record
    /// and non-finite times are skipped with a warning. The returned
    /// series may be empty if the driver has no laps in range; the
    /// simulator rejects that case as insufficient data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDriver`] if the session has no laps at
    /// all for the driver.
    pub fn lap_times(
        &self,
        driver: &str,
        start_lap: u32,
        end_lap: Option<u32>,
    ) -> Result<LapTimeSeries> {
        if !self.has_driver(driver) {
            return Err(Error::UnknownDriver(driver.to_string()));
        }

        let end = end_lap.unwrap_or(u32::MAX);
        let mut records: Vec<&LapRecord> = self
            .laps
            .iter()
            .filter(|l| l.driver.eq_ignore_ascii_case(driver))
            .filter(|l| l.lap_number >= start_lap && l.lap_number <= end)
            .collect();
        records.sort_by_key(|l| l.lap_number);
        records.dedup_by_key(|l| l.lap_number);

        let mut times = Vec::with_capacity(records.len());
        let mut first_lap = start_lap;
        for record in records {
            if !record.time_seconds.is_finite() {
                warn!(
                    driver = %record.driver,
                    lap = record.lap_number,
                    "skipping lap with non-finite time"
                );
                continue;
            }
            if times.is_empty() {
                first_lap = record.lap_number;
            }
            times.push(record.time_seconds);
        }

        Ok(LapTimeSeries::new(first_lap, times)?.with_driver(driver.to_uppercase()))
    }

    /// Creates an example session for demos and tests.
    ///
    /// A short end-of-race battle: the pursuer NOR laps consistently
    /// quicker than the target RUS from lap 52 on.
    #[must_use]
    pub fn example() -> Self {
        let mut session = Self::with_name("Example Grand Prix");

        let nor = [89.412, 89.287, 89.131, 89.356, 89.204, 89.178];
        let rus = [89.845, 89.912, 89.788, 90.034, 89.901, 90.112];

        for (offset, (&nor_time, &rus_time)) in nor.iter().zip(rus.iter()).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let lap_number = 52 + offset as u32;
            session.add_lap(LapRecord::new("NOR", lap_number, nor_time));
            session.add_lap(LapRecord::new("RUS", lap_number, rus_time));
        }

        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        let mut session = Session::with_name("test");
        session.add_lap(LapRecord::new("NOR", 53, 89.5));
        session.add_lap(LapRecord::new("NOR", 52, 90.0));
        session.add_lap(LapRecord::new("NOR", 54, 89.2));
        session.add_lap(LapRecord::new("RUS", 52, 89.8));
        session.add_lap(LapRecord::new("RUS", 53, 89.9));
        session
    }

    #[test]
    fn drivers_are_distinct_and_sorted() {
        let session = sample_session();
        assert_eq!(session.drivers(), vec!["NOR".to_string(), "RUS".to_string()]);
    }

    #[test]
    fn lap_times_sorted_by_lap_number() {
        let session = sample_session();
        let stint = session.lap_times("NOR", 52, None).unwrap();

        assert_eq!(stint.times(), &[90.0, 89.5, 89.2]);
        assert_eq!(stint.first_lap(), 52);
        assert_eq!(stint.driver.as_deref(), Some("NOR"));
    }

    #[test]
    fn lap_times_respects_range() {
        let session = sample_session();
        let stint = session.lap_times("NOR", 53, Some(53)).unwrap();

        assert_eq!(stint.times(), &[89.5]);
        assert_eq!(stint.first_lap(), 53);
    }

    #[test]
    fn driver_lookup_is_case_insensitive() {
        let session = sample_session();
        let stint = session.lap_times("nor", 52, None).unwrap();
        assert_eq!(stint.len(), 3);
    }

    #[test]
    fn unknown_driver_is_rejected() {
        let session = sample_session();
        let result = session.lap_times("VER", 52, None);
        assert!(matches!(result, Err(Error::UnknownDriver(_))));
    }

    #[test]
    fn out_of_range_selection_is_empty_not_an_error() {
        let session = sample_session();
        let stint = session.lap_times("RUS", 60, None).unwrap();
        assert!(stint.is_empty());
    }

    #[test]
    fn duplicate_lap_numbers_keep_first() {
        let mut session = sample_session();
        session.add_lap(LapRecord::new("NOR", 52, 95.0));

        let stint = session.lap_times("NOR", 52, None).unwrap();
        assert_eq!(stint.times()[0], 90.0);
    }

    #[test]
    fn non_finite_times_are_skipped() {
        let mut session = sample_session();
        session.add_lap(LapRecord::new("RUS", 54, f64::NAN));

        let stint = session.lap_times("RUS", 52, None).unwrap();
        assert_eq!(stint.len(), 2);
    }

    #[test]
    fn example_session_has_two_drivers() {
        let session = Session::example();
        assert_eq!(session.drivers().len(), 2);
        assert!(!session.lap_times("NOR", 52, None).unwrap().is_empty());
    }
}
