//! Engine tuning.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::constants::*;
use super::error::EngineResult;

/// Tunables for one battle controller.
///
/// Missing JSON fields fall back to the constants in `core::constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Real-time period between ticks. Hosts drive `tick()` at this rate.
    pub tick_interval_ms: u64,
    /// Gauge value that triggers an attack.
    pub gauge_threshold: f64,
    /// Gauge gain per tick is `speed * tick_factor`.
    pub tick_factor: f64,
    pub raid_tick_factor: f64,
    /// Resolved player turns before a raid times out.
    pub raid_turn_cap: u32,
    pub log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            gauge_threshold: GAUGE_THRESHOLD,
            tick_factor: TICK_FACTOR,
            raid_tick_factor: RAID_TICK_FACTOR,
            raid_turn_cap: RAID_TURN_CAP,
            log_capacity: BATTLE_LOG_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn tick_factor_for(&self, is_raid: bool) -> f64 {
        if is_raid {
            self.raid_tick_factor
        } else {
            self.tick_factor
        }
    }
}
