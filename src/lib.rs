//! Spirit Bond - battle and progression engine library.
//!
//! Gauge-driven combat between the player's creature and scaled opponents,
//! elemental type matchups, route exploration, rewards and leveling, and the
//! turn-capped raid variant. Hosts own rendering and persistence and plug in
//! through [`store::GameStore`].

pub mod battle;
pub mod combat;
pub mod content;
pub mod core;
pub mod creature;
pub mod encounter;
pub mod exploration;
pub mod rewards;
pub mod simulator;
pub mod store;
