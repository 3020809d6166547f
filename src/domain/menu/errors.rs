//! Menu service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum MenuServiceError {
    #[error("unknown timezone: {0} (expected an IANA identifier)")]
    InvalidTimezone(String),

    #[error("storage error")]
    Store(#[from] StoreError),
}
