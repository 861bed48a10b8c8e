//! Session loading from JSON and CSV files.

use crate::error::{Error, Result};
use crate::session::{LapRecord, Session};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Raw lap format for JSON input.
#[derive(Debug, Deserialize)]
struct RawLap {
    driver: String,
    #[serde(default)]
    lap: Option<u32>,
    #[serde(default)]
    lap_number: Option<u32>,
    #[serde(default)]
    time_seconds: Option<f64>,
    #[serde(default)]
    time_ms: Option<u64>,
    #[serde(default)]
    time: Option<String>,
}

impl RawLap {
    fn into_record(self) -> Result<LapRecord> {
        let lap_number = self
            .lap
            .or(self.lap_number)
            .ok_or_else(|| Error::InvalidLap(format!("lap for {} has no lap number", self.driver)))?;

        let time_seconds = if let Some(seconds) = self.time_seconds {
            seconds
        } else if let Some(ms) = self.time_ms {
            #[allow(clippy::cast_precision_loss)]
            let seconds = ms as f64 / 1000.0;
            seconds
        } else if let Some(text) = self.time {
            parse_lap_time(&text)?
        } else {
            return Err(Error::InvalidLap(format!(
                "lap {lap_number} for {} has no time",
                self.driver
            )));
        };

        Ok(LapRecord::new(self.driver, lap_number, time_seconds))
    }
}

/// Parses a lap-time string like `"1:29.347"`, `"89.347"`, or
/// `"89347ms"` into seconds.
///
/// # Errors
///
/// Returns an error if the string matches none of the accepted forms.
pub fn parse_lap_time(s: &str) -> Result<f64> {
    let s = s.trim();

    // "m:ss.fff" minute:second form
    if let Some((minutes, seconds)) = s.split_once(':') {
        let minutes: f64 = minutes
            .trim()
            .parse()
            .map_err(|_| Error::InvalidLap(format!("invalid lap time: {s}")))?;
        let seconds: f64 = seconds
            .trim()
            .parse()
            .map_err(|_| Error::InvalidLap(format!("invalid lap time: {s}")))?;
        return Ok(minutes * 60.0 + seconds);
    }

    if let Some(ms_str) = s.strip_suffix("ms") {
        let ms: f64 = ms_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidLap(format!("invalid lap time: {s}")))?;
        return Ok(ms / 1000.0);
    }

    let stripped = s.strip_suffix('s').unwrap_or(s);
    stripped
        .trim()
        .parse()
        .map_err(|_| Error::InvalidLap(format!("invalid lap time format: {s}")))
}

impl Session {
    /// Loads a session from a JSON or CSV file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading session from {}", path.display());

        if path.extension().is_some_and(|e| e == "csv") {
            return Self::from_csv_file(path);
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Loads and merges every `.json` and `.csv` file in a directory.
    ///
    /// Unreadable files are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn load_directory(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading session from directory {}", path.display());

        let mut session = Self::new();

        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();

            let loadable = file_path
                .extension()
                .is_some_and(|e| e == "json" || e == "csv");
            if !loadable {
                continue;
            }

            debug!("Loading {}", file_path.display());
            match Self::load_file(&file_path) {
                Ok(file_session) => {
                    if session.name.is_none() {
                        session.name = file_session.name.clone();
                    }
                    if session.date.is_none() {
                        session.date = file_session.date;
                    }
                    for lap in file_session.laps() {
                        session.add_lap(lap.clone());
                    }
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", file_path.display(), e);
                }
            }
        }

        info!("Loaded {} laps from directory", session.len());
        Ok(session)
    }

    /// Parses a session from a JSON string.
    ///
    /// The JSON can be an array of lap objects or an object with a
    /// `laps` field (plus optional `name` and `date`).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON matches neither shape.
    pub fn parse_json(json: &str) -> Result<Self> {
        if let Ok(raw_laps) = serde_json::from_str::<Vec<RawLap>>(json) {
            return Ok(Self::from_raw_laps(None, None, raw_laps));
        }

        #[derive(Deserialize)]
        struct SessionWrapper {
            #[serde(default)]
            name: Option<String>,
            #[serde(default)]
            date: Option<DateTime<Utc>>,
            laps: Vec<RawLap>,
        }

        if let Ok(wrapper) = serde_json::from_str::<SessionWrapper>(json) {
            return Ok(Self::from_raw_laps(wrapper.name, wrapper.date, wrapper.laps));
        }

        Err(Error::LoadError(
            "JSON must be an array of laps or an object with a 'laps' field".to_string(),
        ))
    }

    fn from_raw_laps(
        name: Option<String>,
        date: Option<DateTime<Utc>>,
        raw_laps: Vec<RawLap>,
    ) -> Self {
        let mut session = Self::new();
        session.name = name;
        session.date = date;

        for raw in raw_laps {
            match raw.into_record() {
                Ok(record) => session.add_lap(record),
                Err(e) => {
                    warn!("Skipping invalid lap: {}", e);
                }
            }
        }

        session
    }

    /// Loads a session from a CSV file.
    ///
    /// Expected format:
    /// ```csv
    /// driver,lap,time
    /// NOR,52,1:29.412
    /// RUS,52,89.845
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Loads a session from a CSV reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV cannot be parsed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        #[derive(Debug, Deserialize)]
        struct CsvLap {
            driver: String,
            lap: u32,
            time: String,
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut session = Self::new();

        for result in csv_reader.deserialize() {
            let record: CsvLap = result?;
            let time_seconds = parse_lap_time(&record.time)?;
            session.add_lap(LapRecord::new(record.driver, record.lap, time_seconds));
        }

        Ok(session)
    }
}
