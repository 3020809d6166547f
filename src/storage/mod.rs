//! Store implementations for the domain's persistence ports.

pub mod memory;
pub mod postgres;

use thiserror::Error;

/// Failure surfaced by a store backend.
///
/// Services propagate these unchanged; validation errors never originate
/// here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
