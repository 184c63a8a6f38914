//! Engine error type.
//!
//! Configuration problems (missing templates, bad routes) fail loudly here.
//! Battle outcomes are never errors; see `combat::BattleResult`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("unknown opponent template: {0}")]
    UnknownTemplate(String),

    #[error("unknown raid boss: {0}")]
    UnknownRaid(String),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("no opponent templates available for {0}")]
    EmptyPool(&'static str),

    #[error("route {route} has no {slot} slot")]
    MissingSlot { route: String, slot: &'static str },

    #[error("template {id} has inverted level range {min}..={max}")]
    InvalidLevelRange { id: String, min: u32, max: u32 },

    #[error("route {route} requires level {required}, creature is level {level}")]
    RouteLocked {
        route: String,
        required: u32,
        level: u32,
    },

    #[error("no creature in the store")]
    NoCreature,

    #[error("no battle is active")]
    NoActiveBattle,

    #[error("cannot {0} while a battle is active")]
    BattleInProgress(&'static str),

    #[error("item {0} is not in the inventory")]
    ItemNotOwned(String),

    #[error("item {0} has no healing effect")]
    NotHealing(String),

    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EngineError {
    pub fn missing_slot(route: impl Into<String>, slot: &'static str) -> Self {
        Self::MissingSlot {
            route: route.into(),
            slot,
        }
    }

    /// True for errors caused by bad content tables rather than player actions.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownRoute(_)
                | Self::UnknownTemplate(_)
                | Self::UnknownRaid(_)
                | Self::UnknownItem(_)
                | Self::EmptyPool(_)
                | Self::MissingSlot { .. }
                | Self::InvalidLevelRange { .. }
                | Self::Parse(_)
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
