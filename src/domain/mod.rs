//! Domain modules.

pub mod categories;
pub mod menu;
pub mod products;
pub mod promotions;
pub mod schedule;
