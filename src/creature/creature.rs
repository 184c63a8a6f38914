use serde::{Deserialize, Serialize};

use super::stats::{StatBlock, Vitals};
use crate::combat::element::Element;
use crate::content::OpponentTemplate;

/// The player's creature as held by the external store.
///
/// `stats` are the effective stats (base plus `equipment_bonus`).
/// Invariant: `stats.hp <= stats.max_hp`.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so stored
/// creatures from older saves keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: String,
    #[serde(default)]
    pub species_id: u32,
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "default_stage")]
    pub stage: u32,
    pub level: u32,
    #[serde(alias = "exp")]
    pub experience: u64,
    #[serde(alias = "maxExp")]
    pub experience_to_next: u64,
    pub stats: StatBlock,
    #[serde(default)]
    pub vitals: Vitals,
    /// Stat bonus currently granted by equipped gear, already folded into `stats`.
    #[serde(default)]
    pub equipment_bonus: StatBlock,
}

fn default_stage() -> u32 {
    1
}

impl Creature {
    pub fn new(id: impl Into<String>, name: impl Into<String>, element: Element, stats: StatBlock) -> Self {
        Self {
            id: id.into(),
            species_id: 0,
            name: name.into(),
            element,
            stage: 1,
            level: 1,
            experience: 0,
            experience_to_next: 100,
            stats,
            vitals: Vitals::default(),
            equipment_bonus: StatBlock::default(),
        }
    }

    /// Hatches a level-1 creature from an arena species template.
    pub fn hatch(template: &OpponentTemplate) -> Self {
        let mut creature = Self::new(
            template.id.clone(),
            template.name.clone(),
            template.element,
            template.base_stats,
        );
        creature.stage = template.stage;
        creature
    }

    /// Stats without the equipment bonus.
    pub fn base_stats(&self) -> StatBlock {
        self.stats.minus(&self.equipment_bonus)
    }

    /// Sets hp, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u32) {
        self.stats.hp = hp.min(self.stats.max_hp);
    }

    pub fn heal_full(&mut self) {
        self.stats.hp = self.stats.max_hp;
    }

    /// Replaces the equipment bonus, moving the old one out of `stats` first.
    pub fn equip_bonus(&mut self, bonus: StatBlock) {
        let hp = self.stats.hp;
        self.stats = self.base_stats().plus(&bonus);
        self.equipment_bonus = bonus;
        self.set_hp(hp);
    }
}
