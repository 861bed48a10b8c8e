//! Battle report rendering for Slipstream.
//!
//! A pure consumer of simulation output: the reporter formats the
//! verdict, pace comparison, and gap evolution as markdown and never
//! re-derives simulation state.
//!
//! # Example
//!
//! ```rust,ignore
//! use slipstream_report::generate_battle_report;
//!
//! let report = generate_battle_report(&pursuer, &target, &params, &result);
//! assert!(report.contains("# Battle Report"));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod chart;
pub mod report;

pub use chart::render_gap_chart;
pub use report::generate_battle_report;
