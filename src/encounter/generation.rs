//! Opponent generation from content templates.
//!
//! Selection order: raid template, then the active route's slot for the
//! current step, then the arena pool for the creature's growth stage.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::element::Element;
use crate::content::{ContentTables, LootEntry, OpponentTemplate, RouteDef};
use crate::core::constants::{ARENA_LEVEL_SPREAD, LEVEL_SCALING_STEP, MINION_SLOTS};
use crate::core::error::{EngineError, EngineResult};
use crate::creature::StatBlock;
use crate::exploration::EncounterTier;

/// Engine-owned opponent for a single battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub template_id: String,
    pub name: String,
    pub element: Element,
    pub stage: u32,
    pub level: u32,
    pub stats: StatBlock,
    pub loot: Vec<LootEntry>,
    pub is_boss: bool,
}

/// Where the current opponent came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterKind {
    Arena,
    Route {
        route_id: String,
        step: u32,
        tier: EncounterTier,
    },
    Raid {
        raid_id: String,
    },
}

impl EncounterKind {
    pub fn is_raid(&self) -> bool {
        matches!(self, EncounterKind::Raid { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub opponent: Opponent,
    pub kind: EncounterKind,
}

/// What the generator needs to know about the player's creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerContext {
    pub level: u32,
    pub stage: u32,
}

/// A route position to draw from.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    pub route: &'a RouteDef,
    pub step: u32,
}

/// Stat multiplier for a scaled opponent: `1 + (level - 1) * 0.1`.
pub fn level_scale(level: u32) -> f64 {
    1.0 + level.saturating_sub(1) as f64 * LEVEL_SCALING_STEP
}

/// Builds an opponent from the highest-priority source available.
pub fn generate(
    content: &ContentTables,
    player: PlayerContext,
    route: Option<RouteContext<'_>>,
    raid_id: Option<&str>,
    rng: &mut impl Rng,
) -> EngineResult<Encounter> {
    if let Some(raid_id) = raid_id {
        let template = content.raid_boss(raid_id)?;
        let level = template.level_range.map_or(player.level, |(min, _)| min.max(1));
        return Ok(Encounter {
            opponent: build_opponent(template, level, 1.0),
            kind: EncounterKind::Raid {
                raid_id: raid_id.to_string(),
            },
        });
    }

    if let Some(ctx) = route {
        let tier = EncounterTier::for_step(ctx.step);
        let template_id = route_slot(ctx.route, tier, rng)?;
        let template = content.enemy(template_id)?;
        let level = roll_level(template, player, rng)?;
        return Ok(Encounter {
            opponent: build_opponent(template, level, level_scale(level)),
            kind: EncounterKind::Route {
                route_id: ctx.route.id.clone(),
                step: ctx.step,
                tier,
            },
        });
    }

    let template = pick_arena_template(content, player.stage, rng)?;
    let level = roll_level(template, player, rng)?;
    Ok(Encounter {
        opponent: build_opponent(template, level, level_scale(level)),
        kind: EncounterKind::Arena,
    })
}

/// Template id for a route step. Minion slots are drawn uniformly.
fn route_slot<'a>(
    route: &'a RouteDef,
    tier: EncounterTier,
    rng: &mut impl Rng,
) -> EngineResult<&'a str> {
    let ids = &route.enemy_template_ids;
    match tier {
        EncounterTier::Minion => {
            let minions = &ids[..ids.len().min(MINION_SLOTS)];
            if minions.is_empty() {
                return Err(EngineError::missing_slot(&route.id, "minion"));
            }
            Ok(minions[rng.gen_range(0..minions.len())].as_str())
        }
        EncounterTier::MiniBoss => ids
            .get(MINION_SLOTS)
            .map(String::as_str)
            .ok_or_else(|| EngineError::missing_slot(&route.id, "mini-boss")),
        EncounterTier::Boss => route
            .boss_template_id
            .as_deref()
            .ok_or_else(|| EngineError::missing_slot(&route.id, "boss")),
    }
}

/// Same-stage species, or the whole pool if none match.
fn pick_arena_template<'a>(
    content: &'a ContentTables,
    stage: u32,
    rng: &mut impl Rng,
) -> EngineResult<&'a OpponentTemplate> {
    let same_stage: Vec<&OpponentTemplate> =
        content.species.iter().filter(|s| s.stage == stage).collect();
    let pool: Vec<&OpponentTemplate> = if same_stage.is_empty() {
        content.species.iter().collect()
    } else {
        same_stage
    };
    if pool.is_empty() {
        return Err(EngineError::EmptyPool("arena"));
    }
    Ok(pool[rng.gen_range(0..pool.len())])
}

/// Draws a level uniformly from the template's range, or player level ±1.
fn roll_level(
    template: &OpponentTemplate,
    player: PlayerContext,
    rng: &mut impl Rng,
) -> EngineResult<u32> {
    let (min, max) = match template.level_range {
        Some((min, max)) if min > max => {
            return Err(EngineError::InvalidLevelRange {
                id: template.id.clone(),
                min,
                max,
            })
        }
        Some((min, max)) => (min.max(1), max.max(1)),
        None => {
            let level = player.level.max(1);
            (
                level.saturating_sub(ARENA_LEVEL_SPREAD).max(1),
                level + ARENA_LEVEL_SPREAD,
            )
        }
    };
    Ok(rng.gen_range(min..=max))
}

fn build_opponent(template: &OpponentTemplate, level: u32, scale: f64) -> Opponent {
    let mut stats = template.base_stats.scaled(scale);
    // Opponents always enter at full health.
    stats.hp = stats.max_hp;
    Opponent {
        template_id: template.id.clone(),
        name: template.name.clone(),
        element: template.element,
        stage: template.stage,
        level,
        stats,
        loot: template.loot.clone(),
        is_boss: template.is_boss,
    }
}
