//! Action-gauge tick loop.

use tracing::debug;

use super::element::{multiplier, Effectiveness, Element};
use super::types::{BattleEvent, BattleResult, BattleSession, LogTone};
use crate::core::config::EngineConfig;
use crate::core::constants::{DEFENSE_FACTOR, MIN_RAW_DAMAGE};
use crate::creature::{Creature, StatBlock};

/// Result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackResult {
    pub damage: u32,
    pub effectiveness: Effectiveness,
}

/// `floor(max(1, atk - def * 0.5) * type_multiplier)`, never below 1.
///
/// The floor of 1 keeps every fight finite even when a resisted hit would
/// round down to nothing.
pub fn calculate_damage(attack: u32, defense: u32, type_multiplier: f64) -> u32 {
    let raw = (attack as f64 - defense as f64 * DEFENSE_FACTOR).max(MIN_RAW_DAMAGE);
    ((raw * type_multiplier).floor() as u32).max(1)
}

fn resolve_attack(
    attacker: &StatBlock,
    attacker_element: Element,
    defender: &StatBlock,
    defender_element: Element,
) -> AttackResult {
    let type_multiplier = multiplier(attacker_element, defender_element);
    AttackResult {
        damage: calculate_damage(attacker.attack, defender.defense, type_multiplier),
        effectiveness: Effectiveness::from_multiplier(type_multiplier),
    }
}

impl BattleSession {
    /// Advances the fight by one tick. Returns what happened, in order.
    ///
    /// `player` is the creature as currently held by the store; its stats are
    /// re-read every tick while hp and gauges stay with the session.
    pub fn tick(&mut self, player: &Creature, config: &EngineConfig) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        if !self.is_active() || self.is_paused {
            return events;
        }

        // Terminal checks come before gauge work so a downed side never swings.
        if self.player_hp == 0 {
            events.push(self.finish(BattleResult::Lose, false));
            return events;
        }
        if self.opponent.stats.hp == 0 {
            events.push(self.finish(BattleResult::Win, false));
            return events;
        }
        if self.is_raid() && self.turn >= config.raid_turn_cap {
            events.push(self.finish(BattleResult::Fled, true));
            return events;
        }

        self.ticks += 1;
        let tick_factor = config.tick_factor_for(self.is_raid());

        // --- Player gauge ---
        self.player_gauge += player.stats.speed as f64 * tick_factor;
        if self.player_gauge >= config.gauge_threshold {
            self.player_gauge = 0.0;
            let attack = resolve_attack(
                &player.stats,
                player.element,
                &self.opponent.stats,
                self.opponent.element,
            );
            self.opponent.stats.hp = self.opponent.stats.hp.saturating_sub(attack.damage);

            let hint = match attack.effectiveness {
                Effectiveness::Super => " (super effective!)",
                Effectiveness::Resisted => " (resisted...)",
                Effectiveness::Normal => "",
            };
            if self.is_raid() {
                self.turn += 1;
                self.damage_dealt += attack.damage as u64;
                self.add_log_entry(
                    format!(
                        "Turn {}/{}: attack! (-{}){}",
                        self.turn, config.raid_turn_cap, attack.damage, hint
                    ),
                    LogTone::PlayerAttack,
                );
            } else {
                self.add_log_entry(
                    format!("{} attacks! (-{}){}", player.name, attack.damage, hint),
                    LogTone::PlayerAttack,
                );
            }
            debug!(
                session = %self.id,
                damage = attack.damage,
                opponent_hp = self.opponent.stats.hp,
                "player attack"
            );
            events.push(BattleEvent::PlayerAttack {
                damage: attack.damage,
                effectiveness: attack.effectiveness,
            });
        }

        // A downed opponent does not retaliate.
        if self.opponent.stats.hp == 0 {
            return events;
        }

        // --- Opponent gauge ---
        self.opponent_gauge += self.opponent.stats.speed as f64 * tick_factor;
        if self.opponent_gauge >= config.gauge_threshold {
            self.opponent_gauge = 0.0;
            let attack = resolve_attack(
                &self.opponent.stats,
                self.opponent.element,
                &player.stats,
                player.element,
            );
            self.player_hp = self.player_hp.saturating_sub(attack.damage);

            let hint = match attack.effectiveness {
                Effectiveness::Super => " (crushing!)",
                Effectiveness::Resisted => " (glancing)",
                Effectiveness::Normal => "",
            };
            self.add_log_entry(
                format!(
                    "{} strikes back! (-{}){}",
                    self.opponent.name, attack.damage, hint
                ),
                LogTone::OpponentAttack,
            );
            debug!(
                session = %self.id,
                damage = attack.damage,
                player_hp = self.player_hp,
                "opponent attack"
            );
            events.push(BattleEvent::OpponentAttack {
                damage: attack.damage,
                effectiveness: attack.effectiveness,
            });
        }

        events
    }

    /// Forces a terminal result. Has no effect once the battle is over.
    pub fn finish(&mut self, result: BattleResult, timed_out: bool) -> BattleEvent {
        if self.result.is_none() {
            self.result = Some(result);
            self.is_paused = false;
        }
        BattleEvent::Ended {
            result: self.result.unwrap_or(result),
            timed_out,
        }
    }

    pub fn pause(&mut self) {
        if self.is_active() {
            self.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    /// Restores player hp up to `max_hp`. Returns the amount actually healed.
    pub fn heal_player(&mut self, amount: u32, max_hp: u32) -> u32 {
        let before = self.player_hp;
        self.player_hp = self.player_hp.saturating_add(amount).min(max_hp).max(before);
        let healed = self.player_hp - before;
        self.add_log_entry(format!("Recovered {} HP", healed), LogTone::Heal);
        healed
    }
}
