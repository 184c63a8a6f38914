use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::combat::element::Element;
use crate::core::error::{EngineError, EngineResult};
use crate::creature::StatBlock;

/// One entry of a loot table. `chance` is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootEntry {
    pub item_id: String,
    pub chance: f64,
}

/// Base definition an opponent is generated from.
///
/// Used for route enemies, raid bosses and arena species alike. Arena
/// species omit `level_range` and are levelled around the player instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "default_stage")]
    pub stage: u32,
    #[serde(default)]
    pub level_range: Option<(u32, u32)>,
    #[serde(alias = "stats")]
    pub base_stats: StatBlock,
    #[serde(default, alias = "drops")]
    pub loot: Vec<LootEntry>,
    #[serde(default)]
    pub is_boss: bool,
}

fn default_stage() -> u32 {
    1
}

/// A fixed five-stage route: three minion slots, a mini-boss, then the boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "default_required_level")]
    pub required_level: u32,
    /// Minion ids in slots 0..3, mini-boss in slot 3.
    #[serde(alias = "enemies")]
    pub enemy_template_ids: Vec<String>,
    #[serde(default, alias = "bossId")]
    pub boss_template_id: Option<String>,
}

fn default_required_level() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Consumable,
    EvoMaterial,
    Material,
}

/// Effect applied when an item is used. Fields absent from content are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemEffect {
    pub hunger: i32,
    pub mood: i32,
    /// Flat heal.
    pub hp: u32,
    /// Heal as a percentage of max hp.
    pub hp_percent: f64,
}

impl ItemEffect {
    pub fn heals(&self) -> bool {
        self.hp > 0 || self.hp_percent > 0.0
    }

    /// Total heal for a creature with `max_hp`.
    pub fn heal_amount(&self, max_hp: u32) -> u32 {
        let percent = (max_hp as f64 * self.hp_percent / 100.0).floor() as u32;
        self.hp.saturating_add(percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub effect: Option<ItemEffect>,
}

/// Read-only content the engine consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTables {
    /// Arena pool, grouped by growth stage at selection time.
    pub species: Vec<OpponentTemplate>,
    pub enemies: HashMap<String, OpponentTemplate>,
    pub raid_bosses: HashMap<String, OpponentTemplate>,
    pub routes: Vec<RouteDef>,
    pub items: HashMap<String, ItemDef>,
}

impl ContentTables {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn route(&self, id: &str) -> EngineResult<&RouteDef> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::UnknownRoute(id.to_string()))
    }

    /// Arena species by id.
    pub fn species_template(&self, id: &str) -> EngineResult<&OpponentTemplate> {
        self.species
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::UnknownTemplate(id.to_string()))
    }

    pub fn enemy(&self, id: &str) -> EngineResult<&OpponentTemplate> {
        self.enemies
            .get(id)
            .ok_or_else(|| EngineError::UnknownTemplate(id.to_string()))
    }

    pub fn raid_boss(&self, id: &str) -> EngineResult<&OpponentTemplate> {
        self.raid_bosses
            .get(id)
            .ok_or_else(|| EngineError::UnknownRaid(id.to_string()))
    }

    pub fn item(&self, id: &str) -> EngineResult<&ItemDef> {
        self.items
            .get(id)
            .ok_or_else(|| EngineError::UnknownItem(id.to_string()))
    }

    /// Display name for an item, falling back to its id.
    pub fn item_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map_or(id, |item| item.name.as_str())
    }
}
