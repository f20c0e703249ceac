//! Simulation driver, statistics, and reference-stream generation.
//!
//! # Components
//! - [`Simulator`] - replays one sequence through one or more policies
//! - [`RunStats`] / [`RunReport`] - per-run accounting
//! - [`generate_references`] - synthetic reference sequences

mod driver;
mod sequence;
mod stats;

pub use driver::{PolicyRun, Simulator};
pub use sequence::generate_references;
pub use stats::{RunReport, RunStats};
