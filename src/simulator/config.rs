//! Simulation configuration.

use serde::Serialize;

/// What every battle in a run is fought against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimTarget {
    Arena,
    Route(String),
    Raid(String),
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub target: SimTarget,

    /// Arena species the run's creature hatches from
    pub species_id: String,

    /// Level the creature is trained to before the first battle
    pub starting_level: u32,

    /// Battles fought per run. Route runs stop early once the boss falls.
    pub battles_per_run: u32,

    /// Ticks before a single battle is abandoned as stuck
    pub max_ticks_per_battle: u64,

    /// Restore hp between battles, standing in for the host's rest cycle
    pub rest_between_battles: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            target: SimTarget::Route("terra_1".to_string()),
            species_id: "starter_pupper".to_string(),
            starting_level: 1,
            battles_per_run: 20,
            max_ticks_per_battle: 100_000,
            rest_between_battles: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Single raid attempt per run
    pub fn raid_test(raid_id: &str, starting_level: u32) -> Self {
        Self {
            num_runs: 100,
            target: SimTarget::Raid(raid_id.to_string()),
            starting_level,
            battles_per_run: 1,
            ..Default::default()
        }
    }

    /// Quick config for route balance
    pub fn route_balance_test(route_id: &str) -> Self {
        Self {
            num_runs: 100,
            target: SimTarget::Route(route_id.to_string()),
            ..Default::default()
        }
    }
}
