//! Turns a finished battle into one store transition.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::drops::{experience_for_level, gold_for_level, roll_loot};
use super::leveling::apply_experience;
use crate::combat::{BattleResult, BattleSession, LogTone};
use crate::content::ContentTables;
use crate::core::constants::{
    DEFEAT_HP, FLEE_VITALS_COST, LOSE_VITALS_COST, RAID_LOSE_VITALS_COST,
    RAID_TOKEN_DAMAGE_DIVISOR, WIN_VITALS_COST,
};
use crate::creature::{Creature, VitalsDelta};
use crate::encounter::EncounterKind;
use crate::exploration::{ExplorationProgress, RouteOutcome};

/// Raid scoring for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidScore {
    pub damage: u64,
    pub tokens: u64,
    /// UTC day the damage counts towards.
    pub day: NaiveDate,
}

/// Everything a finished battle changes, computed up front.
///
/// Applying it is the store's job (`GameStore::commit`), so observers never
/// see a creature that has its gold but not yet its level.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub result: BattleResult,
    /// Creature as it should be stored afterwards (hp, level, stats).
    pub creature: Creature,
    pub vitals: VitalsDelta,
    pub gold: u64,
    pub experience: u64,
    pub levels_gained: u32,
    pub drops: Vec<String>,
    /// New exploration state, `None` when progress is unchanged.
    pub exploration: Option<ExplorationProgress>,
    pub route_outcome: Option<RouteOutcome>,
    pub raid: Option<RaidScore>,
}

impl Settlement {
    fn unchanged(result: BattleResult, creature: &Creature) -> Self {
        Self {
            result,
            creature: creature.clone(),
            vitals: VitalsDelta::default(),
            gold: 0,
            experience: 0,
            levels_gained: 0,
            drops: Vec::new(),
            exploration: None,
            route_outcome: None,
            raid: None,
        }
    }

    /// Player-facing log lines describing the settlement.
    pub fn log_lines(&self, content: &ContentTables) -> Vec<(String, LogTone)> {
        let mut lines = Vec::new();

        if let Some(raid) = &self.raid {
            let headline = match self.result {
                BattleResult::Win => format!("The titan falls! (Damage: {})", raid.damage),
                BattleResult::Lose => format!("Defeated... (Damage: {})", raid.damage),
                BattleResult::Fled => format!("Raid over! (Damage: {})", raid.damage),
            };
            let tone = match self.result {
                BattleResult::Lose => LogTone::Defeat,
                _ => LogTone::Raid,
            };
            lines.push((headline, tone));
            lines.push((format!("Earned {} Spirit Tokens", raid.tokens), LogTone::Raid));
            return lines;
        }

        match self.result {
            BattleResult::Win => {
                let mut text = format!("Victory! +{}G, +{} EXP", self.gold, self.experience);
                if !self.drops.is_empty() {
                    let names: Vec<&str> =
                        self.drops.iter().map(|id| content.item_name(id)).collect();
                    text.push_str(&format!(" and items: {}", names.join(", ")));
                }
                lines.push((text, LogTone::Reward));
                if self.levels_gained > 0 {
                    lines.push((
                        format!("Level up! Now Lv.{}", self.creature.level),
                        LogTone::Reward,
                    ));
                }
                match self.route_outcome {
                    Some(RouteOutcome::Cleared) => lines.push((
                        "Route cleared! Heading back to town...".to_string(),
                        LogTone::System,
                    )),
                    Some(RouteOutcome::Advanced { .. }) => lines.push((
                        "Pressing on to the next area...".to_string(),
                        LogTone::System,
                    )),
                    None => {}
                }
            }
            BattleResult::Lose => lines.push((
                "Defeated... carried back to town to recover".to_string(),
                LogTone::Defeat,
            )),
            BattleResult::Fled => lines.push(("Got away safely!".to_string(), LogTone::System)),
        }
        lines
    }
}

/// Resolves rewards and penalties for a finished session.
///
/// `creature` and `progress` are the values currently held by the store.
/// `today` keys raid damage. Returns `None` while the session is still
/// running.
pub fn settle(
    session: &BattleSession,
    creature: &Creature,
    progress: &ExplorationProgress,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Option<Settlement> {
    let result = session.result?;
    let mut settlement = Settlement::unchanged(result, creature);

    if session.is_raid() {
        let damage = session.damage_dealt;
        settlement.raid = Some(RaidScore {
            damage,
            tokens: damage / RAID_TOKEN_DAMAGE_DIVISOR,
            day: today,
        });
        if result == BattleResult::Lose {
            settlement.vitals = RAID_LOSE_VITALS_COST.into();
            settlement.creature.set_hp(DEFEAT_HP);
        }
        return Some(settlement);
    }

    match result {
        BattleResult::Win => {
            let level = session.opponent.level;
            settlement.gold = gold_for_level(level);
            settlement.experience = experience_for_level(level);
            settlement.drops = roll_loot(&session.opponent.loot, rng);
            settlement.vitals = WIN_VITALS_COST.into();

            // Surviving hp is written back before leveling may heal it
            settlement.creature.set_hp(session.player_hp);
            settlement.levels_gained =
                apply_experience(&mut settlement.creature, settlement.experience);

            if let EncounterKind::Route { route_id, tier, .. } = &session.kind {
                // Only counts if the player is still on the route the fight began on
                if progress.route_id.as_deref() == Some(route_id.as_str()) {
                    let mut next = progress.clone();
                    settlement.route_outcome = Some(next.record_win(*tier));
                    settlement.exploration = Some(next);
                }
            }
        }
        BattleResult::Lose => {
            settlement.vitals = LOSE_VITALS_COST.into();
            settlement.creature.set_hp(DEFEAT_HP);
            settlement.exploration = Some(ExplorationProgress::new());
        }
        BattleResult::Fled => {
            settlement.vitals = FLEE_VITALS_COST.into();
        }
    }
    Some(settlement)
}
