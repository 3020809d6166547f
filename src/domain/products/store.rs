//! Product persistence port.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::models::{Product, ProductFilter, ProductUuid},
    storage::StoreError,
};

/// Persistence port for products. Backends keep a stable retrieval order
/// for [`list`](ProductStore::list).
#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, uuid: ProductUuid) -> Result<Option<Product>, StoreError>;

    async fn exists(&self, uuid: ProductUuid) -> Result<bool, StoreError>;

    async fn insert(&self, product: Product) -> Result<(), StoreError>;

    /// Replaces the stored row for `product.uuid`; returns affected rows.
    async fn update(&self, product: Product) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, uuid: ProductUuid) -> Result<u64, StoreError>;
}
