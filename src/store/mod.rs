//! The mutable game state the engine reads from and writes back to.
//!
//! The engine never keeps its own copy of the creature across ticks; it reads
//! through [`GameStore`] and writes through it.

mod memory;

use chrono::NaiveDate;

use crate::core::error::EngineResult;
use crate::creature::{Creature, VitalsDelta};
use crate::exploration::ExplorationProgress;
use crate::rewards::Settlement;

#[allow(unused_imports)]
pub use memory::{InMemoryStore, PlayerRecord};

/// Host-side game state.
pub trait GameStore {
    /// The player's current creature, if one has been hatched.
    fn creature(&self) -> Option<&Creature>;
    fn set_creature(&mut self, creature: Creature);
    /// Applies a vitals change to the creature, clamped to 0..=100.
    fn update_vitals(&mut self, delta: VitalsDelta);

    fn add_inventory_item(&mut self, item_id: &str, count: u32);
    /// Removes one unit. Fails if the item is not held.
    fn take_inventory_item(&mut self, item_id: &str) -> EngineResult<()>;

    fn player(&self) -> &PlayerRecord;
    fn add_gold(&mut self, amount: u64);
    fn add_raid_tokens(&mut self, amount: u64);
    /// Adds raid damage to the total for `day`.
    fn record_raid_damage(&mut self, day: NaiveDate, amount: u64);

    fn exploration(&self) -> &ExplorationProgress;
    fn set_exploration(&mut self, progress: ExplorationProgress);

    /// Applies a whole settlement as one state transition.
    ///
    /// The default runs the individual writes in order. Hosts that publish
    /// changes to observers should override it and publish once at the end.
    fn commit(&mut self, settlement: &Settlement) {
        self.set_creature(settlement.creature.clone());
        if !settlement.vitals.is_empty() {
            self.update_vitals(settlement.vitals);
        }
        if settlement.gold > 0 {
            self.add_gold(settlement.gold);
        }
        for item_id in &settlement.drops {
            self.add_inventory_item(item_id, 1);
        }
        if let Some(progress) = &settlement.exploration {
            self.set_exploration(progress.clone());
        }
        if let Some(raid) = &settlement.raid {
            self.add_raid_tokens(raid.tokens);
            self.record_raid_damage(raid.day, raid.damage);
        }
    }
}
