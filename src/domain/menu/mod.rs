//! Menu resolution.
//!
//! The menu is never persisted: every call re-reads the product and
//! promotion snapshots and recomputes which promotions are live for the
//! caller's timezone at that instant.

mod errors;
pub mod models;
pub mod moment;
pub mod resolver;
pub mod service;

pub use errors::MenuServiceError;
pub use service::{CatalogMenuService, MenuService};

/// Timezone used when a caller does not supply one.
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
