//! Route exploration: minions, then a mini-boss, then the boss.

mod progress;

#[allow(unused_imports)]
pub use progress::{select_route, stage_label, EncounterTier, ExplorationProgress, RouteOutcome};
