//! Battle controller: the engine surface hosts talk to.

mod controller;

#[allow(unused_imports)]
pub use controller::BattleController;
