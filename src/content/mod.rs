//! Read-only content tables: opponent templates, routes, raid bosses and items.

mod data;
mod types;

#[allow(unused_imports)]
pub use types::*;
