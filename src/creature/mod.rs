//! Creature record, stat block and vitals.

#![allow(unused_imports)]

#[allow(clippy::module_inception)]
pub mod creature;
pub mod stats;

pub use creature::*;
pub use stats::*;
