//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::{
        menu::{CatalogMenuService, MenuService},
        products::{CatalogProductsService, ProductStore, ProductsService},
        promotions::{CatalogPromotionsService, PromotionStore, PromotionsService},
    },
    storage::postgres::{PgProductStore, PgPromotionStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Service handles wired over a shared pair of store ports. Stores are
/// injected explicitly; nothing here is a process-wide singleton.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub menu: Arc<dyn MenuService>,
}

impl AppContext {
    /// Wires the services over the given stores.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductStore>,
        promotions: Arc<dyn PromotionStore>,
        default_timezone: impl Into<String>,
    ) -> Self {
        Self {
            products: Arc::new(CatalogProductsService::new(
                products.clone(),
                promotions.clone(),
            )),
            promotions: Arc::new(CatalogPromotionsService::new(
                products.clone(),
                promotions.clone(),
            )),
            menu: Arc::new(CatalogMenuService::with_default_timezone(
                products,
                promotions,
                default_timezone,
            )),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        default_timezone: impl Into<String>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let products: Arc<dyn ProductStore> = Arc::new(PgProductStore::new(pool.clone()));
        let promotions: Arc<dyn PromotionStore> = Arc::new(PgPromotionStore::new(pool));

        Ok(Self::new(products, promotions, default_timezone))
    }
}
