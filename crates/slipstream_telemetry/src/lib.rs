//! Session telemetry for Slipstream.
//!
//! This crate provides:
//! - Session storage of per-driver, per-lap times
//! - Loading from JSON and CSV files or whole directories
//! - Driver and lap-range selection into a validated series
//!
//! # Example
//!
//! ```rust,ignore
//! use slipstream_telemetry::Session;
//!
//! let session = Session::load_file("bahrain.json")?;
//! let stint = session.lap_times("NOR", 52, None)?;
//! assert!(!stint.is_empty());
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod loader;
pub mod session;

pub use error::{Error, Result};
pub use session::{LapRecord, Session};
