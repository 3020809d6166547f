//! Promotions service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::domain::{
    products::{models::ProductUuid, store::ProductStore},
    promotions::{
        errors::PromotionsServiceError,
        models::{NewPromotion, Promotion, PromotionPatch, PromotionUuid},
        store::PromotionStore,
    },
    schedule::{DaysOfWeek, TimeWindow},
};

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Creates a promotion for an existing product.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Retrieves promotions, optionally restricted to one product.
    async fn list_promotions(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Promotion>, PromotionsServiceError>;

    /// Retrieves a single promotion.
    async fn get_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Applies a partial update, re-validating whatever is present.
    async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        patch: PromotionPatch,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Deletes a single promotion.
    async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError>;
}

/// [`PromotionsService`] over injected store ports.
#[derive(Clone)]
pub struct CatalogPromotionsService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
}

impl CatalogPromotionsService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>, promotions: Arc<dyn PromotionStore>) -> Self {
        Self {
            products,
            promotions,
        }
    }
}

#[async_trait]
impl PromotionsService for CatalogPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(product_uuid = %promotion.product_uuid),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<Promotion, PromotionsServiceError> {
        if promotion.description.trim().is_empty() {
            return Err(PromotionsServiceError::InvalidDescription);
        }

        let product = self
            .products
            .get(promotion.product_uuid)
            .await?
            .ok_or(PromotionsServiceError::ProductNotFound)?;

        let promotional_price = promotion.discount.resolve(product.price)?;
        let days_of_week = DaysOfWeek::new(&promotion.days_of_week)?;
        let window = TimeWindow::parse(&promotion.start_time, &promotion.end_time)?;

        let now = Timestamp::now();
        let record = Promotion {
            uuid: PromotionUuid::new(),
            product_uuid: product.uuid,
            description: promotion.description,
            promotional_price,
            days_of_week,
            window,
            created_at: now,
            updated_at: now,
        };

        self.promotions.insert(record.clone()).await?;

        info!(promotion_uuid = %record.uuid, "created promotion");

        Ok(record)
    }

    async fn list_promotions(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Promotion>, PromotionsServiceError> {
        if let Some(product) = product {
            if !self.products.exists(product).await? {
                return Err(PromotionsServiceError::ProductNotFound);
            }
        }

        Ok(self.promotions.list(product).await?)
    }

    async fn get_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<Promotion, PromotionsServiceError> {
        self.promotions
            .get(promotion)
            .await?
            .ok_or(PromotionsServiceError::NotFound)
    }

    #[tracing::instrument(name = "promotions.service.update_promotion", skip(self, patch), err)]
    async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        patch: PromotionPatch,
    ) -> Result<Promotion, PromotionsServiceError> {
        if patch.is_empty() {
            return Err(PromotionsServiceError::EmptyUpdate);
        }

        let mut record = self.get_promotion(promotion).await?;

        if let Some(description) = patch.description {
            if description.trim().is_empty() {
                return Err(PromotionsServiceError::InvalidDescription);
            }
            record.description = description;
        }

        // The discount is re-validated against the product's *current*
        // price, not the price at creation time.
        if let Some(discount) = patch.discount {
            let product = self
                .products
                .get(record.product_uuid)
                .await?
                .ok_or(PromotionsServiceError::ProductNotFound)?;

            record.promotional_price = discount.resolve(product.price)?;
        }

        if let Some(days) = patch.days_of_week {
            record.days_of_week = DaysOfWeek::new(&days)?;
        }

        if patch.start_time.is_some() || patch.end_time.is_some() {
            let start = match patch.start_time {
                Some(raw) => raw.parse()?,
                None => record.window.start(),
            };
            let end = match patch.end_time {
                Some(raw) => raw.parse()?,
                None => record.window.end(),
            };
            record.window = TimeWindow::new(start, end)?;
        }

        record.updated_at = Timestamp::now();

        let rows_affected = self.promotions.update(record.clone()).await?;
        if rows_affected == 0 {
            return Err(PromotionsServiceError::NotFound);
        }

        info!(promotion_uuid = %record.uuid, "updated promotion");

        Ok(record)
    }

    #[tracing::instrument(name = "promotions.service.delete_promotion", skip(self), err)]
    async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError> {
        let rows_affected = self.promotions.delete(promotion).await?;
        if rows_affected == 0 {
            return Err(PromotionsServiceError::NotFound);
        }

        info!(promotion_uuid = %promotion, "deleted promotion");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{
        domain::{
            categories::ProductCategory,
            products::{
                ProductsService,
                models::{NewProduct, Product, ProductPatch},
                service::CatalogProductsService,
            },
            promotions::models::{Discount, DiscountError},
            schedule::{DaysOfWeekError, TimeWindowError},
        },
        storage::memory::{MemoryProductStore, MemoryPromotionStore},
    };

    use super::*;

    struct Fixture {
        products: Arc<MemoryProductStore>,
        promotions: Arc<MemoryPromotionStore>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                products: Arc::new(MemoryProductStore::new()),
                promotions: Arc::new(MemoryPromotionStore::new()),
            }
        }

        fn service(&self) -> CatalogPromotionsService {
            CatalogPromotionsService::new(self.products.clone(), self.promotions.clone())
        }

        fn products_service(&self) -> CatalogProductsService {
            CatalogProductsService::new(self.products.clone(), self.promotions.clone())
        }

        /// Seeds one R$50.00 product to hang promotions off.
        async fn seed_product(&self) -> Result<Product, Box<dyn std::error::Error>> {
            Ok(self
                .products_service()
                .create_product(NewProduct {
                    name: "Feijoada".to_string(),
                    price: dec!(50.00),
                    category: ProductCategory::PratosPrincipais,
                    visible: true,
                    display_order: None,
                })
                .await?)
        }
    }

    fn happy_hour(product: &Product) -> NewPromotion {
        NewPromotion {
            product_uuid: product.uuid,
            description: "Segunda da feijoada".to_string(),
            discount: Discount::Price(dec!(25.00)),
            days_of_week: vec![1],
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_a_promotion_with_a_resolved_price() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let created = service
            .create_promotion(NewPromotion {
                discount: Discount::PercentageOff(dec!(50)),
                ..happy_hour(&product)
            })
            .await?;

        assert_eq!(created.promotional_price, dec!(25.00));
        assert_eq!(created.product_uuid, product.uuid);

        let fetched = service.get_promotion(created.uuid).await?;
        assert_eq!(fetched.description, "Segunda da feijoada");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_promotions_for_missing_products() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let result = service
            .create_promotion(NewPromotion {
                product_uuid: ProductUuid::new(),
                ..happy_hour(&product)
            })
            .await;

        assert!(matches!(
            result,
            Err(PromotionsServiceError::ProductNotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_discounts_that_do_not_lower_the_price() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let at_base = service
            .create_promotion(NewPromotion {
                discount: Discount::Price(dec!(50.00)),
                ..happy_hour(&product)
            })
            .await;
        assert!(matches!(
            at_base,
            Err(PromotionsServiceError::InvalidDiscount(
                DiscountError::NotBelowBasePrice
            ))
        ));

        let out_of_range = service
            .create_promotion(NewPromotion {
                discount: Discount::PercentageOff(dec!(150)),
                ..happy_hour(&product)
            })
            .await;
        assert!(matches!(
            out_of_range,
            Err(PromotionsServiceError::InvalidDiscount(
                DiscountError::PercentageOutOfRange
            ))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_bad_days_and_bad_windows() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let bad_day = service
            .create_promotion(NewPromotion {
                days_of_week: vec![7],
                ..happy_hour(&product)
            })
            .await;
        assert!(matches!(
            bad_day,
            Err(PromotionsServiceError::InvalidDaysOfWeek(
                DaysOfWeekError::OutOfRange(7)
            ))
        ));

        let too_short = service
            .create_promotion(NewPromotion {
                start_time: "18:00".to_string(),
                end_time: "18:10".to_string(),
                ..happy_hour(&product)
            })
            .await;
        assert!(matches!(
            too_short,
            Err(PromotionsServiceError::InvalidTimeWindow(
                TimeWindowError::WindowTooShort
            ))
        ));

        let unpadded = service
            .create_promotion(NewPromotion {
                start_time: "9:00".to_string(),
                ..happy_hour(&product)
            })
            .await;
        assert!(matches!(
            unpadded,
            Err(PromotionsServiceError::InvalidTimeWindow(
                TimeWindowError::BadTimeFormat(_)
            ))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn list_can_be_scoped_to_a_product() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let other = fixture.seed_product().await?;
        let service = fixture.service();

        service.create_promotion(happy_hour(&product)).await?;
        service.create_promotion(happy_hour(&other)).await?;

        let scoped = service.list_promotions(Some(product.uuid)).await?;
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].product_uuid, product.uuid);

        let unknown = service.list_promotions(Some(ProductUuid::new())).await;
        assert!(matches!(
            unknown,
            Err(PromotionsServiceError::ProductNotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_merges_a_partial_window() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let created = service.create_promotion(happy_hour(&product)).await?;

        let updated = service
            .update_promotion(
                created.uuid,
                PromotionPatch {
                    end_time: Some("21:30".to_string()),
                    ..PromotionPatch::default()
                },
            )
            .await?;

        assert_eq!(updated.window.start().to_string(), "18:00");
        assert_eq!(updated.window.end().to_string(), "21:30");

        Ok(())
    }

    #[tokio::test]
    async fn update_revalidates_the_discount_against_the_current_price() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let created = service.create_promotion(happy_hour(&product)).await?;

        // Drop the base price below the promotional price, then try to
        // keep the old promotional price.
        fixture
            .products_service()
            .update_product(
                product.uuid,
                ProductPatch {
                    price: Some(dec!(20.00)),
                    ..ProductPatch::default()
                },
            )
            .await?;

        let result = service
            .update_promotion(
                created.uuid,
                PromotionPatch {
                    discount: Some(Discount::Price(dec!(25.00))),
                    ..PromotionPatch::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(PromotionsServiceError::InvalidDiscount(
                DiscountError::NotBelowBasePrice
            ))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_an_empty_patch() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let created = service.create_promotion(happy_hour(&product)).await?;

        let result = service
            .update_promotion(created.uuid, PromotionPatch::default())
            .await;

        assert!(matches!(result, Err(PromotionsServiceError::EmptyUpdate)));

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_promotion() -> TestResult {
        let fixture = Fixture::new();
        let product = fixture.seed_product().await?;
        let service = fixture.service();

        let created = service.create_promotion(happy_hour(&product)).await?;

        service.delete_promotion(created.uuid).await?;

        assert!(matches!(
            service.get_promotion(created.uuid).await,
            Err(PromotionsServiceError::NotFound)
        ));
        assert!(matches!(
            service.delete_promotion(created.uuid).await,
            Err(PromotionsServiceError::NotFound)
        ));

        Ok(())
    }
}
