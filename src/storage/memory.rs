//! In-memory store backends.
//!
//! Vec-backed behind an async `RwLock`, preserving insertion order — which
//! makes insertion order the promotion tie-break order for this backend.
//! Used by the test suite and for running without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        products::{
            models::{Product, ProductFilter, ProductUuid},
            store::ProductStore,
        },
        promotions::{
            models::{Promotion, PromotionUuid},
            store::PromotionStore,
        },
    },
    storage::StoreError,
};

/// In-memory [`ProductStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().await;

        Ok(products
            .iter()
            .filter(|product| {
                filter.category.is_none_or(|c| product.category == c)
                    && filter.visible.is_none_or(|v| product.visible == v)
            })
            .cloned()
            .collect())
    }

    async fn get(&self, uuid: ProductUuid) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;

        Ok(products.iter().find(|product| product.uuid == uuid).cloned())
    }

    async fn exists(&self, uuid: ProductUuid) -> Result<bool, StoreError> {
        let products = self.products.read().await;

        Ok(products.iter().any(|product| product.uuid == uuid))
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        self.products.write().await.push(product);

        Ok(())
    }

    async fn update(&self, product: Product) -> Result<u64, StoreError> {
        let mut products = self.products.write().await;

        match products.iter_mut().find(|p| p.uuid == product.uuid) {
            Some(slot) => {
                *slot = product;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, uuid: ProductUuid) -> Result<u64, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();

        products.retain(|product| product.uuid != uuid);

        Ok((before - products.len()) as u64)
    }
}

/// In-memory [`PromotionStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryPromotionStore {
    promotions: Arc<RwLock<Vec<Promotion>>>,
}

impl MemoryPromotionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromotionStore for MemoryPromotionStore {
    async fn list(&self, product: Option<ProductUuid>) -> Result<Vec<Promotion>, StoreError> {
        let promotions = self.promotions.read().await;

        Ok(promotions
            .iter()
            .filter(|promo| product.is_none_or(|uuid| promo.product_uuid == uuid))
            .cloned()
            .collect())
    }

    async fn get(&self, uuid: PromotionUuid) -> Result<Option<Promotion>, StoreError> {
        let promotions = self.promotions.read().await;

        Ok(promotions.iter().find(|promo| promo.uuid == uuid).cloned())
    }

    async fn insert(&self, promotion: Promotion) -> Result<(), StoreError> {
        self.promotions.write().await.push(promotion);

        Ok(())
    }

    async fn update(&self, promotion: Promotion) -> Result<u64, StoreError> {
        let mut promotions = self.promotions.write().await;

        match promotions.iter_mut().find(|p| p.uuid == promotion.uuid) {
            Some(slot) => {
                *slot = promotion;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, uuid: PromotionUuid) -> Result<u64, StoreError> {
        let mut promotions = self.promotions.write().await;
        let before = promotions.len();

        promotions.retain(|promo| promo.uuid != uuid);

        Ok((before - promotions.len()) as u64)
    }

    async fn delete_by_product(&self, product: ProductUuid) -> Result<u64, StoreError> {
        let mut promotions = self.promotions.write().await;
        let before = promotions.len();

        promotions.retain(|promo| promo.product_uuid != product);

        Ok((before - promotions.len()) as u64)
    }
}
