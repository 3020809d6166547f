//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{
    products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductFilter, ProductPatch, ProductUuid},
        store::ProductStore,
    },
    promotions::store::PromotionStore,
};

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Creates a product.
    async fn create_product(&self, product: NewProduct)
    -> Result<Product, ProductsServiceError>;

    /// Retrieves products matching `filter`.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        patch: ProductPatch,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product together with every promotion that references it.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

/// [`ProductsService`] over injected store ports.
#[derive(Clone)]
pub struct CatalogProductsService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>, promotions: Arc<dyn PromotionStore>) -> Self {
        Self {
            products,
            promotions,
        }
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    #[tracing::instrument(name = "products.service.create_product", skip(self, product), err)]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::InvalidName);
        }
        if product.price < Decimal::ZERO {
            return Err(ProductsServiceError::InvalidPrice);
        }

        let now = Timestamp::now();
        let record = Product {
            uuid: ProductUuid::new(),
            name: product.name,
            price: product.price,
            category: product.category,
            visible: product.visible,
            display_order: product.display_order,
            created_at: now,
            updated_at: now,
        };

        self.products.insert(record.clone()).await?;

        info!(product_uuid = %record.uuid, "created product");

        Ok(record)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.products.list(filter).await?)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.products
            .get(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(name = "products.service.update_product", skip(self, patch), err)]
    async fn update_product(
        &self,
        product: ProductUuid,
        patch: ProductPatch,
    ) -> Result<Product, ProductsServiceError> {
        if patch.is_empty() {
            return Err(ProductsServiceError::EmptyUpdate);
        }
        if matches!(patch.name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ProductsServiceError::InvalidName);
        }
        if matches!(patch.price, Some(price) if price < Decimal::ZERO) {
            return Err(ProductsServiceError::InvalidPrice);
        }

        let mut record = self.get_product(product).await?;
        patch.apply(&mut record);
        record.updated_at = Timestamp::now();

        let rows_affected = self.products.update(record.clone()).await?;
        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_uuid = %record.uuid, "updated product");

        Ok(record)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        if !self.products.exists(product).await? {
            return Err(ProductsServiceError::NotFound);
        }

        // Promotions go first so a deleted product can never leave orphans.
        let promotions_removed = self.promotions.delete_by_product(product).await?;

        let rows_affected = self.products.delete(product).await?;
        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(
            product_uuid = %product,
            promotions_removed,
            "deleted product"
        );

        Ok(())
    }
}
