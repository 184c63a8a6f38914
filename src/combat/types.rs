use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use super::element::Effectiveness;
use crate::core::constants::BATTLE_LOG_CAPACITY;
use crate::encounter::{Encounter, EncounterKind, Opponent};

/// Terminal result of a battle. A raid that hits its turn cap ends as `Fled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    Win,
    Lose,
    Fled,
}

/// Colour hint for a battle log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTone {
    System,
    PlayerAttack,
    OpponentAttack,
    Reward,
    Defeat,
    Raid,
    Heal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub id: u64,
    pub message: String,
    pub tone: LogTone,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    PlayerAttack {
        damage: u32,
        effectiveness: Effectiveness,
    },
    OpponentAttack {
        damage: u32,
        effectiveness: Effectiveness,
    },
    Ended {
        result: BattleResult,
        /// Raid turn cap reached rather than a real escape.
        timed_out: bool,
    },
}

/// State of one fight, owned by the controller for its lifetime.
///
/// The opponent's live hp is `opponent.stats.hp`. Player stats are not
/// stored here; they are read from the store on every tick.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub id: Uuid,
    pub kind: EncounterKind,
    pub opponent: Opponent,
    pub player_hp: u32,
    pub player_gauge: f64,
    pub opponent_gauge: f64,
    pub result: Option<BattleResult>,
    pub is_paused: bool,
    /// Resolved player turns (raid mode only).
    pub turn: u32,
    /// Damage dealt by the player (raid mode only).
    pub damage_dealt: u64,
    pub ticks: u64,
    log: VecDeque<BattleLogEntry>,
    log_capacity: usize,
    next_log_id: u64,
}

impl BattleSession {
    pub fn new(encounter: Encounter, player_hp: u32) -> Self {
        Self::with_log_capacity(encounter, player_hp, BATTLE_LOG_CAPACITY)
    }

    pub fn with_log_capacity(encounter: Encounter, player_hp: u32, log_capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: encounter.kind,
            opponent: encounter.opponent,
            player_hp,
            player_gauge: 0.0,
            opponent_gauge: 0.0,
            result: None,
            is_paused: false,
            turn: 0,
            damage_dealt: 0,
            ticks: 0,
            log: VecDeque::with_capacity(log_capacity),
            log_capacity: log_capacity.max(1),
            next_log_id: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }

    pub fn is_raid(&self) -> bool {
        self.kind.is_raid()
    }

    pub fn add_log_entry(&mut self, message: String, tone: LogTone) {
        // Keep only the most recent entries
        while self.log.len() >= self.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(BattleLogEntry {
            id: self.next_log_id,
            message,
            tone,
        });
        self.next_log_id += 1;
    }

    pub fn log(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.log.iter()
    }

    pub fn snapshot(&self, player_max_hp: u32) -> BattleSnapshot {
        BattleSnapshot {
            session_id: Some(self.id),
            is_active: self.is_active(),
            result: self.result,
            opponent: Some(self.opponent.clone()),
            player_hp: self.player_hp,
            player_max_hp,
            opponent_hp: self.opponent.stats.hp,
            player_gauge: self.player_gauge,
            opponent_gauge: self.opponent_gauge,
            log: self.log.iter().cloned().collect(),
            is_paused: self.is_paused,
            is_raid: self.is_raid(),
            turn: self.turn,
            damage_dealt: self.damage_dealt,
        }
    }
}

/// Read-only view published to the UI after every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    pub session_id: Option<Uuid>,
    pub is_active: bool,
    pub result: Option<BattleResult>,
    pub opponent: Option<Opponent>,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub opponent_hp: u32,
    pub player_gauge: f64,
    pub opponent_gauge: f64,
    pub log: Vec<BattleLogEntry>,
    pub is_paused: bool,
    pub is_raid: bool,
    pub turn: u32,
    pub damage_dealt: u64,
}
