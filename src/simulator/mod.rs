//! Headless batch simulator for balance checks.
//!
//! Runs many seeded playthroughs of a route, raid or the arena through the
//! real battle controller and aggregates the outcomes.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimTarget};
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
