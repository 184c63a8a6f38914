//! Opponent generation and level scaling.

mod generation;

#[allow(unused_imports)]
pub use generation::*;
