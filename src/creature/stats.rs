use serde::{Deserialize, Serialize};

use crate::core::constants::VITALS_MAX;

/// Combat stat block shared by creatures, templates and opponents.
///
/// Field aliases accept the short names used by content files (`atk`, `def`...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: u32,
    pub max_hp: u32,
    #[serde(alias = "atk")]
    pub attack: u32,
    #[serde(alias = "def")]
    pub defense: u32,
    #[serde(alias = "spd")]
    pub speed: u32,
    #[serde(alias = "luk")]
    pub luck: u32,
}

impl StatBlock {
    /// Full-health block with `hp == max_hp`.
    pub fn new(max_hp: u32, attack: u32, defense: u32, speed: u32, luck: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            attack,
            defense,
            speed,
            luck,
        }
    }

    /// Multiplies every stat (hp included) by `factor`, flooring each result.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |v: u32| (v as f64 * factor).floor() as u32;
        Self {
            hp: scale(self.hp),
            max_hp: scale(self.max_hp),
            attack: scale(self.attack),
            defense: scale(self.defense),
            speed: scale(self.speed),
            luck: scale(self.luck),
        }
    }

    /// Component-wise sum. hp is left for the caller to clamp.
    pub fn plus(&self, other: &StatBlock) -> Self {
        Self {
            hp: self.hp.saturating_add(other.hp),
            max_hp: self.max_hp.saturating_add(other.max_hp),
            attack: self.attack.saturating_add(other.attack),
            defense: self.defense.saturating_add(other.defense),
            speed: self.speed.saturating_add(other.speed),
            luck: self.luck.saturating_add(other.luck),
        }
    }

    /// Component-wise difference, floored at zero.
    pub fn minus(&self, other: &StatBlock) -> Self {
        Self {
            hp: self.hp.saturating_sub(other.hp),
            max_hp: self.max_hp.saturating_sub(other.max_hp),
            attack: self.attack.saturating_sub(other.attack),
            defense: self.defense.saturating_sub(other.defense),
            speed: self.speed.saturating_sub(other.speed),
            luck: self.luck.saturating_sub(other.luck),
        }
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == StatBlock::default()
    }
}

/// Care meters on the creature. Each stays within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: i32,
    pub mood: i32,
    pub energy: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: VITALS_MAX,
            mood: VITALS_MAX,
            energy: VITALS_MAX,
        }
    }
}

impl Vitals {
    pub fn apply(&mut self, delta: VitalsDelta) {
        self.hunger = (self.hunger + delta.hunger).clamp(0, VITALS_MAX);
        self.mood = (self.mood + delta.mood).clamp(0, VITALS_MAX);
        self.energy = (self.energy + delta.energy).clamp(0, VITALS_MAX);
    }
}

/// Signed change to vitals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalsDelta {
    pub hunger: i32,
    pub mood: i32,
    pub energy: i32,
}

impl VitalsDelta {
    pub fn is_empty(&self) -> bool {
        *self == VitalsDelta::default()
    }
}

impl From<(i32, i32, i32)> for VitalsDelta {
    fn from((hunger, mood, energy): (i32, i32, i32)) -> Self {
        Self {
            hunger,
            mood,
            energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_floors_each_stat() {
        let base = StatBlock::new(95, 15, 25, 5, 10);
        let scaled = base.scaled(1.1);
        assert_eq!(scaled.max_hp, 104); // 104.5
        assert_eq!(scaled.hp, 104);
        assert_eq!(scaled.attack, 16); // 16.5
        assert_eq!(scaled.defense, 27); // 27.5
        assert_eq!(scaled.speed, 5); // 5.5
        assert_eq!(scaled.luck, 11);
    }

    #[test]
    fn test_scaled_identity() {
        let base = StatBlock::new(80, 15, 25, 5, 10);
        assert_eq!(base.scaled(1.0), base);
    }

    #[test]
    fn test_minus_saturates() {
        let a = StatBlock::new(10, 1, 1, 1, 1);
        let b = StatBlock::new(20, 5, 0, 0, 0);
        let diff = a.minus(&b);
        assert_eq!(diff.max_hp, 0);
        assert_eq!(diff.attack, 0);
        assert_eq!(diff.defense, 1);
    }

    #[test]
    fn test_with_hp_clamps_to_max() {
        let block = StatBlock::new(50, 1, 1, 1, 1).with_hp(80);
        assert_eq!(block.hp, 50);
    }

    #[test]
    fn test_vitals_clamp() {
        let mut vitals = Vitals::default();
        vitals.apply(VitalsDelta::from((5, -20, -150)));
        assert_eq!(vitals.hunger, 100);
        assert_eq!(vitals.mood, 80);
        assert_eq!(vitals.energy, 0);
    }

    #[test]
    fn test_short_field_aliases() {
        let json = r#"{"hp":80,"maxHp":80,"atk":15,"def":25,"spd":5,"luk":10}"#;
        let block: StatBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block, StatBlock::new(80, 15, 25, 5, 10));
    }
}
