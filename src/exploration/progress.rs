//! Route exploration state and transitions.

use serde::{Deserialize, Serialize};

use crate::content::RouteDef;
use crate::core::constants::{BOSS_STEP, MINI_BOSS_STEP, ROUTE_STAGES};
use crate::core::error::{EngineError, EngineResult};

/// Which kind of opponent a route step calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterTier {
    Minion,
    MiniBoss,
    Boss,
}

impl EncounterTier {
    pub fn for_step(step: u32) -> Self {
        match step {
            s if s >= BOSS_STEP => EncounterTier::Boss,
            MINI_BOSS_STEP => EncounterTier::MiniBoss,
            _ => EncounterTier::Minion,
        }
    }
}

/// What a won route battle did to progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Advanced { step: u32 },
    Cleared,
}

/// Persisted route progress: the active route and a step counter.
///
/// Steps 0-2 are minions, 3 the mini-boss, 4 and above the boss. Losing,
/// retreating and clearing the boss all return to the idle state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationProgress {
    #[serde(alias = "activeRouteId")]
    pub route_id: Option<String>,
    #[serde(default, alias = "explorationStep")]
    pub step: u32,
}

impl ExplorationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_route(route_id: impl Into<String>, step: u32) -> Self {
        Self {
            route_id: Some(route_id.into()),
            step,
        }
    }

    pub fn is_exploring(&self) -> bool {
        self.route_id.is_some()
    }

    pub fn set_route(&mut self, route_id: impl Into<String>) {
        self.route_id = Some(route_id.into());
        self.step = 0;
    }

    pub fn advance(&mut self) {
        self.step += 1;
    }

    pub fn reset(&mut self) {
        self.route_id = None;
        self.step = 0;
    }

    pub fn tier(&self) -> EncounterTier {
        EncounterTier::for_step(self.step)
    }

    /// Applies a won battle fought at `tier`.
    ///
    /// Beating the boss clears the route; anything else moves one step on.
    pub fn record_win(&mut self, tier: EncounterTier) -> RouteOutcome {
        if tier == EncounterTier::Boss {
            self.reset();
            RouteOutcome::Cleared
        } else {
            self.advance();
            RouteOutcome::Advanced { step: self.step }
        }
    }

    pub fn stage_label(&self) -> String {
        stage_label(self.step)
    }
}

/// 1-based stage label for a step, e.g. "3/5".
pub fn stage_label(step: u32) -> String {
    format!("{}/{}", (step + 1).min(ROUTE_STAGES), ROUTE_STAGES)
}

/// Enters `route` at step 0 if the creature meets its level requirement.
pub fn select_route(
    progress: &mut ExplorationProgress,
    route: &RouteDef,
    creature_level: u32,
) -> EngineResult<()> {
    if creature_level < route.required_level {
        return Err(EngineError::RouteLocked {
            route: route.id.clone(),
            required: route.required_level,
            level: creature_level,
        });
    }
    progress.set_route(route.id.clone());
    Ok(())
}
