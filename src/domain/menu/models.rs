//! Menu Models

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{categories::ProductCategory, products::models::ProductUuid};

/// Query parameters for a menu read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuQuery {
    pub category: Option<ProductCategory>,
    pub timezone: Option<String>,
}

/// Promotion metadata shown on an active menu line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemPromotion {
    pub description: String,
    pub promotional_price: Decimal,
}

/// A resolved menu line: a visible product with the price it should
/// display right now. Derived, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub uuid: ProductUuid,
    pub name: String,
    pub category: ProductCategory,
    pub original_price: Decimal,
    pub current_price: Decimal,
    pub has_active_promotion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<MenuItemPromotion>,
    pub display_order: Option<i32>,
}
