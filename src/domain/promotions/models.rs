//! Promotion Models

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{
        products::models::ProductUuid,
        schedule::{DaysOfWeek, TimeOfDay, TimeWindow},
    },
    uuids::TypedUuid,
};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<Promotion>;

/// Promotion Model
#[derive(Debug, Clone, Serialize)]
pub struct Promotion {
    pub uuid: PromotionUuid,
    pub product_uuid: ProductUuid,
    pub description: String,
    pub promotional_price: Decimal,
    pub days_of_week: DaysOfWeek,
    #[serde(flatten)]
    pub window: TimeWindow,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Promotion {
    /// Whether this promotion is live at the given local day and time.
    ///
    /// `day` uses 0 = Sunday through 6 = Saturday; the window bounds are
    /// inclusive on both ends.
    #[must_use]
    pub fn is_active_at(&self, day: u8, time: TimeOfDay) -> bool {
        self.days_of_week.contains(day) && self.window.contains(time)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    #[error("discount percentage must be between 0 and 100")]
    PercentageOutOfRange,
    #[error("promotional price must not be negative")]
    NegativePrice,
    #[error("promotional price must be lower than the product price")]
    NotBelowBasePrice,
}

/// Discount input for a promotion: either the promotional price itself or
/// a percentage off the product's base price.
#[derive(Debug, Clone, PartialEq)]
pub enum Discount {
    Price(Decimal),
    PercentageOff(Decimal),
}

impl Discount {
    /// Resolves the promotional price against the product's current base
    /// price. The result is always strictly below `base_price`.
    ///
    /// A percentage resolves to `base_price × (1 − pct/100)` rounded to
    /// two decimal places, midpoint away from zero.
    pub fn resolve(&self, base_price: Decimal) -> Result<Decimal, DiscountError> {
        let price = match self {
            Self::Price(price) => *price,
            Self::PercentageOff(pct) => {
                if *pct < Decimal::ZERO || *pct > Decimal::ONE_HUNDRED {
                    return Err(DiscountError::PercentageOutOfRange);
                }
                (base_price * (Decimal::ONE - pct / Decimal::ONE_HUNDRED))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            }
        };

        if price < Decimal::ZERO {
            return Err(DiscountError::NegativePrice);
        }
        if price >= base_price {
            return Err(DiscountError::NotBelowBasePrice);
        }

        Ok(price)
    }
}

/// New Promotion input. Days and times arrive raw and are validated by the
/// service when the promotion is created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub product_uuid: ProductUuid,
    pub description: String,
    pub discount: Discount,
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
}

/// Partial promotion update: every field independently optional; present
/// fields are validated before the merge is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionPatch {
    pub description: Option<String>,
    pub discount: Option<Discount>,
    pub days_of_week: Option<Vec<u8>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl PromotionPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.discount.is_none()
            && self.days_of_week.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}
