//! Combat system types and logic.

#![allow(unused_imports)]

pub mod element;
pub mod logic;
pub mod types;

pub use element::*;
pub use logic::*;
pub use types::*;
