//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{domain::categories::ProductCategory, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub visible: bool,
    pub display_order: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub visible: bool,
    pub display_order: Option<i32>,
}

/// Partial product update: every field independently optional.
///
/// Applied by merging into the current record before persistence, so the
/// store always writes a complete row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<ProductCategory>,
    pub visible: Option<bool>,
    pub display_order: Option<i32>,
}

impl ProductPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.visible.is_none()
            && self.display_order.is_none()
    }

    /// Merge the present fields into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(visible) = self.visible {
            product.visible = visible;
        }
        if let Some(display_order) = self.display_order {
            product.display_order = Some(display_order);
        }
    }
}

/// Filter for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    pub visible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> Product {
        Product {
            uuid: ProductUuid::new(),
            name: "Moqueca".to_string(),
            price: dec!(58.00),
            category: ProductCategory::PratosPrincipais,
            visible: true,
            display_order: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut product = sample();

        ProductPatch {
            price: Some(dec!(62.00)),
            visible: Some(false),
            ..ProductPatch::default()
        }
        .apply(&mut product);

        assert_eq!(product.price, dec!(62.00));
        assert!(!product.visible);
        assert_eq!(product.name, "Moqueca");
        assert_eq!(product.display_order, None);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ProductPatch::default().is_empty());
        assert!(
            !ProductPatch {
                name: Some("x".to_string()),
                ..ProductPatch::default()
            }
            .is_empty()
        );
    }
}
