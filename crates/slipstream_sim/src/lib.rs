//! Gap-evolution simulation for Slipstream.
//!
//! The simulator answers one question: given two real lap-time stints
//! and a starting gap, does the pursuer catch the target, and on which
//! lap? The recurrence charges the target a constant dirty air penalty
//! plus a linearly growing tire decay penalty, then walks the gap lap
//! by lap.
//!
//! # Example
//!
//! ```rust,ignore
//! use slipstream_sim::Simulator;
//! use stint_model::{LapTimeSeries, SimulationParameters};
//!
//! let pursuer = LapTimeSeries::new(52, vec![90.0, 89.5])?;
//! let target = LapTimeSeries::new(52, vec![89.0, 89.0])?;
//! let params = SimulationParameters::new(52, 2.6)?;
//!
//! let result = Simulator::new(params).simulate(&pursuer, &target)?;
//! assert!(!result.overtake_occurred);
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod align;
pub mod error;
pub mod result;
pub mod simulator;
pub mod trajectory;

pub use align::align;
pub use error::{Error, Result};
pub use result::{BattleSummary, SimulationResult};
pub use simulator::Simulator;
pub use trajectory::GapTrajectory;
