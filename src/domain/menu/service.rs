//! Menu service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::{
    menu::{
        DEFAULT_TIMEZONE,
        errors::MenuServiceError,
        models::{MenuItem, MenuQuery},
        moment::LocalMoment,
        resolver::resolve_menu,
    },
    products::{models::ProductFilter, store::ProductStore},
    promotions::store::PromotionStore,
};

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Resolves the menu as of `now`.
    ///
    /// `now` is supplied by the caller (read once at the boundary) so the
    /// resolution itself is a pure function of the snapshots, the instant
    /// and the timezone.
    async fn menu_items(
        &self,
        query: MenuQuery,
        now: Timestamp,
    ) -> Result<Vec<MenuItem>, MenuServiceError>;
}

/// [`MenuService`] over injected store ports.
#[derive(Clone)]
pub struct CatalogMenuService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
    default_timezone: String,
}

impl CatalogMenuService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>, promotions: Arc<dyn PromotionStore>) -> Self {
        Self::with_default_timezone(products, promotions, DEFAULT_TIMEZONE)
    }

    #[must_use]
    pub fn with_default_timezone(
        products: Arc<dyn ProductStore>,
        promotions: Arc<dyn PromotionStore>,
        default_timezone: impl Into<String>,
    ) -> Self {
        Self {
            products,
            promotions,
            default_timezone: default_timezone.into(),
        }
    }
}

#[async_trait]
impl MenuService for CatalogMenuService {
    #[tracing::instrument(name = "menu.service.menu_items", skip(self), err)]
    async fn menu_items(
        &self,
        query: MenuQuery,
        now: Timestamp,
    ) -> Result<Vec<MenuItem>, MenuServiceError> {
        let timezone = query.timezone.as_deref().unwrap_or(&self.default_timezone);
        let moment = LocalMoment::resolve(now, timezone)?;

        // Independent snapshots; fetched concurrently, both awaited before
        // resolution proceeds.
        let (products, promotions) = tokio::join!(
            self.products.list(ProductFilter::default()),
            self.promotions.list(None),
        );
        let (products, promotions) = (products?, promotions?);

        Ok(resolve_menu(&products, &promotions, moment, query.category))
    }
}
