//! Products service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("product name must not be empty")]
    InvalidName,

    #[error("product price must not be negative")]
    InvalidPrice,

    #[error("nothing to update")]
    EmptyUpdate,

    #[error("storage error")]
    Store(#[from] StoreError),
}
