//! Typed stint model for Slipstream.
//!
//! This crate provides:
//! - Validated per-competitor lap-time series
//! - Validated simulation parameters (dirty air, tire decay)
//! - Pace statistics over a stint
//!
//! # Example
//!
//! ```rust,ignore
//! use stint_model::{LapTimeSeries, SimulationParameters};
//!
//! let stint = LapTimeSeries::new(52, vec![90.0, 89.5, 89.8])?;
//! let params = SimulationParameters::new(52, 2.6)?;
//! assert_eq!(stint.len(), 3);
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod params;
pub mod series;

pub use error::{Error, Result};
pub use params::{SimulationParameters, DEFAULT_DIRTY_AIR_PENALTY, DEFAULT_TIRE_DECAY_RATE};
pub use series::{LapTimeSeries, PaceStats};
