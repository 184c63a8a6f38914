//! Owns the active battle session and drives it against a [`GameStore`].
//!
//! Hosts call [`BattleController::tick`] every `tick_interval()` while a
//! battle is active and render [`BattleController::snapshot`] afterwards.

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{info, warn};

use crate::combat::{BattleEvent, BattleResult, BattleSession, BattleSnapshot, LogTone};
use crate::content::ContentTables;
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::encounter::{self, EncounterKind, PlayerContext, RouteContext};
use crate::exploration;
use crate::rewards::{settle, Settlement};
use crate::store::GameStore;

pub struct BattleController<R: Rng = StdRng> {
    content: ContentTables,
    config: EngineConfig,
    rng: R,
    session: Option<BattleSession>,
    /// Overrides the UTC date used for the raid ledger.
    fixed_day: Option<NaiveDate>,
}

impl BattleController<StdRng> {
    pub fn new(content: ContentTables, config: EngineConfig) -> Self {
        Self::with_rng(content, config, StdRng::from_entropy())
    }

    pub fn seeded(content: ContentTables, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(content, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BattleController<R> {
    pub fn with_rng(content: ContentTables, config: EngineConfig, rng: R) -> Self {
        Self {
            content,
            config,
            rng,
            session: None,
            fixed_day: None,
        }
    }

    pub fn content(&self) -> &ContentTables {
        &self.content
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Pins the raid ledger date instead of reading the clock.
    pub fn set_fixed_day(&mut self, day: NaiveDate) {
        self.fixed_day = Some(day);
    }

    fn today(&self) -> NaiveDate {
        self.fixed_day.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// The current session, finished or not, until it is dismissed.
    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(BattleSession::is_active)
    }

    fn active_session_mut(&mut self) -> EngineResult<&mut BattleSession> {
        self.session
            .as_mut()
            .filter(|s| s.is_active())
            .ok_or(EngineError::NoActiveBattle)
    }

    /// Starts a battle. A raid id takes priority over a route; with neither,
    /// the store's active route is used, falling back to the arena.
    ///
    /// Passing `route_id` selects that route at step 0 (level gate applies).
    /// Nothing is written and the running session is kept if the start fails;
    /// otherwise that session is discarded without settlement.
    pub fn start_battle(
        &mut self,
        store: &mut impl GameStore,
        route_id: Option<&str>,
        raid_id: Option<&str>,
    ) -> EngineResult<&BattleSession> {
        let creature = store.creature().ok_or(EngineError::NoCreature)?.clone();

        let mut progress = store.exploration().clone();
        let mut route_selected = false;
        if raid_id.is_none() {
            if let Some(route_id) = route_id {
                let route = self.content.route(route_id)?;
                exploration::select_route(&mut progress, route, creature.level)?;
                route_selected = true;
            }
        }

        let route = match (&progress.route_id, raid_id) {
            (Some(id), None) => Some(RouteContext {
                route: self.content.route(id)?,
                step: progress.step,
            }),
            _ => None,
        };
        let player = PlayerContext {
            level: creature.level,
            stage: creature.stage,
        };
        let encounter = encounter::generate(&self.content, player, route, raid_id, &mut self.rng)?;

        if route_selected {
            store.set_exploration(progress);
        }
        if let Some(previous) = self.session.take() {
            if previous.is_active() {
                warn!(session = %previous.id, "discarding active battle for a new one");
            }
        }

        let mut session = BattleSession::with_log_capacity(
            encounter,
            creature.stats.hp,
            self.config.log_capacity,
        );
        let intro = match &session.kind {
            EncounterKind::Raid { .. } => format!(
                "RAID BOSS APPEARED! {} (Lv.{})",
                session.opponent.name, session.opponent.level
            ),
            EncounterKind::Route { step, .. } => format!(
                "A wild {} appears! (Stage {}) (Lv.{})",
                session.opponent.name,
                exploration::stage_label(*step),
                session.opponent.level
            ),
            EncounterKind::Arena => format!(
                "A wild {} appears! (Lv.{})",
                session.opponent.name, session.opponent.level
            ),
        };
        let tone = if session.is_raid() {
            LogTone::Raid
        } else {
            LogTone::System
        };
        session.add_log_entry(intro, tone);

        info!(
            session = %session.id,
            opponent = %session.opponent.template_id,
            level = session.opponent.level,
            kind = ?session.kind,
            "battle started"
        );
        Ok(&*self.session.insert(session))
    }

    /// Advances the active battle by one tick, settling it if it ends.
    ///
    /// Idle or paused controllers return no events. If the store has lost its
    /// creature the session is dropped and the error returned.
    pub fn tick(&mut self, store: &mut impl GameStore) -> EngineResult<Vec<BattleEvent>> {
        let Some(session) = self.session.as_mut().filter(|s| s.is_active()) else {
            return Ok(Vec::new());
        };
        let Some(creature) = store.creature() else {
            self.session = None;
            return Err(EngineError::NoCreature);
        };

        let events = session.tick(creature, &self.config);
        if !session.is_active() {
            if let Err(err) = self.settle_finished(store) {
                self.session = None;
                return Err(err);
            }
        }
        Ok(events)
    }

    /// Ticks until the battle ends or `max_ticks` pass.
    pub fn run_to_completion(
        &mut self,
        store: &mut impl GameStore,
        max_ticks: u64,
    ) -> EngineResult<Option<BattleResult>> {
        for _ in 0..max_ticks {
            if !self.is_active() {
                break;
            }
            self.tick(store)?;
        }
        Ok(self.session.as_ref().and_then(|s| s.result))
    }

    /// Ends the active battle as fled. Legal at any point, paused or not.
    pub fn flee(&mut self, store: &mut impl GameStore) -> EngineResult<Settlement> {
        self.active_session_mut()?.finish(BattleResult::Fled, false);
        self.settle_finished(store)
    }

    pub fn pause(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.pause();
        }
    }

    pub fn resume(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.resume();
        }
    }

    /// Heals the in-battle hp, clamped to the creature's max hp.
    ///
    /// The battle bag is meant to be opened while paused, but nothing here
    /// requires it.
    pub fn heal_player(&mut self, store: &impl GameStore, amount: u32) -> EngineResult<u32> {
        let max_hp = store.creature().ok_or(EngineError::NoCreature)?.stats.max_hp;
        let session = self.active_session_mut()?;
        if !session.is_paused {
            warn!(session = %session.id, amount, "healing while the battle is running");
        }
        Ok(session.heal_player(amount, max_hp))
    }

    /// Uses one healing consumable from the inventory on the in-battle hp.
    pub fn use_battle_item(&mut self, store: &mut impl GameStore, item_id: &str) -> EngineResult<u32> {
        if !self.is_active() {
            return Err(EngineError::NoActiveBattle);
        }
        let max_hp = store.creature().ok_or(EngineError::NoCreature)?.stats.max_hp;
        let amount = match self.content.item(item_id)?.effect {
            Some(effect) if effect.heals() => effect.heal_amount(max_hp),
            _ => return Err(EngineError::NotHealing(item_id.to_string())),
        };
        store.take_inventory_item(item_id)?;

        let name = self.content.item_name(item_id).to_string();
        let session = self.active_session_mut()?;
        let healed = session.heal_player(amount, max_hp);
        session.add_log_entry(format!("Used {}", name), LogTone::Heal);
        info!(session = %session.id, item = item_id, healed, "battle item used");
        Ok(healed)
    }

    /// Enters a route at step 0, even if it is already the active one.
    pub fn select_route(&mut self, store: &mut impl GameStore, route_id: &str) -> EngineResult<()> {
        if self.is_active() {
            return Err(EngineError::BattleInProgress("change route"));
        }
        let level = store.creature().ok_or(EngineError::NoCreature)?.level;
        let route = self.content.route(route_id)?;
        let mut progress = store.exploration().clone();
        exploration::select_route(&mut progress, route, level)?;
        store.set_exploration(progress);
        Ok(())
    }

    /// Abandons the current route and returns to town.
    pub fn retreat(&mut self, store: &mut impl GameStore) -> EngineResult<()> {
        if self.is_active() {
            return Err(EngineError::BattleInProgress("retreat"));
        }
        let mut progress = store.exploration().clone();
        progress.reset();
        store.set_exploration(progress);
        info!("retreated from route");
        Ok(())
    }

    /// Drops a finished session so the controller is idle again.
    pub fn dismiss(&mut self) -> EngineResult<()> {
        if self.is_active() {
            return Err(EngineError::BattleInProgress("dismiss"));
        }
        self.session = None;
        Ok(())
    }

    /// Read-only view of the session. Idle controllers return the default.
    pub fn snapshot(&self, store: &impl GameStore) -> BattleSnapshot {
        let max_hp = store.creature().map_or(0, |c| c.stats.max_hp);
        self.session
            .as_ref()
            .map_or_else(BattleSnapshot::default, |s| s.snapshot(max_hp))
    }

    fn settle_finished(&mut self, store: &mut impl GameStore) -> EngineResult<Settlement> {
        let today = self.today();
        let session = self.session.as_mut().ok_or(EngineError::NoActiveBattle)?;
        let creature = store.creature().ok_or(EngineError::NoCreature)?;
        let settlement = settle(session, creature, store.exploration(), today, &mut self.rng)
            .ok_or(EngineError::NoActiveBattle)?;

        store.commit(&settlement);
        for (message, tone) in settlement.log_lines(&self.content) {
            session.add_log_entry(message, tone);
        }
        info!(
            session = %session.id,
            result = ?settlement.result,
            ticks = session.ticks,
            gold = settlement.gold,
            experience = settlement.experience,
            levels = settlement.levels_gained,
            "battle settled"
        );
        if settlement.levels_gained > 0 {
            info!(level = settlement.creature.level, "level up");
        }
        Ok(settlement)
    }
}
