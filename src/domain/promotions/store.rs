//! Promotion persistence port.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        products::models::ProductUuid,
        promotions::models::{Promotion, PromotionUuid},
    },
    storage::StoreError,
};

/// Persistence port for promotions.
///
/// The order [`list`](PromotionStore::list) returns is load-bearing: when
/// several promotions overlap for the same product, the menu resolver
/// keeps the first active one it sees in that order.
#[automock]
#[async_trait]
pub trait PromotionStore: Send + Sync {
    /// Lists promotions, optionally restricted to one product, in the
    /// backend's stable retrieval order.
    async fn list(&self, product: Option<ProductUuid>) -> Result<Vec<Promotion>, StoreError>;

    async fn get(&self, uuid: PromotionUuid) -> Result<Option<Promotion>, StoreError>;

    async fn insert(&self, promotion: Promotion) -> Result<(), StoreError>;

    /// Replaces the stored row for `promotion.uuid`; returns affected rows.
    async fn update(&self, promotion: Promotion) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, uuid: PromotionUuid) -> Result<u64, StoreError>;

    /// Removes every promotion referencing `product`; returns the count.
    async fn delete_by_product(&self, product: ProductUuid) -> Result<u64, StoreError>;
}
