//! Battle settlement: drops, experience and leveling, and the single
//! transition that writes a finished battle back to the store.

#![allow(unused_imports)]

pub mod drops;
pub mod leveling;
pub mod settlement;

pub use drops::*;
pub use leveling::*;
pub use settlement::*;
