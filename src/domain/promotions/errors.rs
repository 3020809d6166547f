//! Promotions service errors.

use thiserror::Error;

use crate::{
    domain::{
        promotions::models::DiscountError,
        schedule::{DaysOfWeekError, TimeWindowError},
    },
    storage::StoreError,
};

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("promotion description must not be empty")]
    InvalidDescription,

    #[error("invalid discount: {0}")]
    InvalidDiscount(#[from] DiscountError),

    #[error("invalid time window: {0}")]
    InvalidTimeWindow(#[from] TimeWindowError),

    #[error("invalid days of week: {0}")]
    InvalidDaysOfWeek(#[from] DaysOfWeekError),

    #[error("nothing to update")]
    EmptyUpdate,

    #[error("storage error")]
    Store(#[from] StoreError),
}
