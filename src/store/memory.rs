use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::GameStore;
use crate::core::error::{EngineError, EngineResult};
use crate::creature::{Creature, VitalsDelta};
use crate::exploration::ExplorationProgress;

/// Player-level counters outside the creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub raid_tokens: u64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            name: "Tamer".to_string(),
            gold: 0,
            raid_tokens: 0,
        }
    }
}

/// Store backed by plain fields. Serializable so a host can save it as JSON.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so older saves
/// keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryStore {
    pub creature: Option<Creature>,
    #[serde(default)]
    pub player: PlayerRecord,
    #[serde(default)]
    pub inventory: HashMap<String, u32>,
    #[serde(default)]
    pub exploration: ExplorationProgress,
    #[serde(default)]
    pub raid_damage_by_day: BTreeMap<NaiveDate, u64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(creature: Creature) -> Self {
        Self {
            creature: Some(creature),
            ..Self::default()
        }
    }

    pub fn item_count(&self, item_id: &str) -> u32 {
        self.inventory.get(item_id).copied().unwrap_or(0)
    }

    pub fn raid_damage_on(&self, day: NaiveDate) -> u64 {
        self.raid_damage_by_day.get(&day).copied().unwrap_or(0)
    }
}

impl GameStore for InMemoryStore {
    fn creature(&self) -> Option<&Creature> {
        self.creature.as_ref()
    }

    fn set_creature(&mut self, creature: Creature) {
        self.creature = Some(creature);
    }

    fn update_vitals(&mut self, delta: VitalsDelta) {
        if let Some(creature) = self.creature.as_mut() {
            creature.vitals.apply(delta);
        }
    }

    fn add_inventory_item(&mut self, item_id: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.inventory.entry(item_id.to_string()).or_insert(0) += count;
    }

    fn take_inventory_item(&mut self, item_id: &str) -> EngineResult<()> {
        match self.inventory.get_mut(item_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.inventory.remove(item_id);
                }
                Ok(())
            }
            _ => Err(EngineError::ItemNotOwned(item_id.to_string())),
        }
    }

    fn player(&self) -> &PlayerRecord {
        &self.player
    }

    fn add_gold(&mut self, amount: u64) {
        self.player.gold = self.player.gold.saturating_add(amount);
    }

    fn add_raid_tokens(&mut self, amount: u64) {
        self.player.raid_tokens = self.player.raid_tokens.saturating_add(amount);
    }

    fn record_raid_damage(&mut self, day: NaiveDate, amount: u64) {
        *self.raid_damage_by_day.entry(day).or_insert(0) += amount;
    }

    fn exploration(&self) -> &ExplorationProgress {
        &self.exploration
    }

    fn set_exploration(&mut self, progress: ExplorationProgress) {
        self.exploration = progress;
    }
}
