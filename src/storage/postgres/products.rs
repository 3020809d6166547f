//! Products store backed by PostgreSQL.

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as, query_scalar};

use async_trait::async_trait;

use crate::{
    domain::{
        categories::ProductCategory,
        products::{
            models::{Product, ProductFilter, ProductUuid},
            store::ProductStore,
        },
    },
    storage::StoreError,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products = query_as::<_, Product>(LIST_PRODUCTS_SQL)
            .bind(filter.category.map(ProductCategory::as_str))
            .bind(filter.visible)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn get(&self, uuid: ProductUuid) -> Result<Option<Product>, StoreError> {
        let product = query_as::<_, Product>(GET_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn exists(&self, uuid: ProductUuid) -> Result<bool, StoreError> {
        let exists: bool = query_scalar(PRODUCT_EXISTS_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        query(INSERT_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(product.price)
            .bind(product.category.as_str())
            .bind(product.visible)
            .bind(product.display_order)
            .bind(SqlxTimestamp::from(product.created_at))
            .bind(SqlxTimestamp::from(product.updated_at))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, product: Product) -> Result<u64, StoreError> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(product.price)
            .bind(product.category.as_str())
            .bind(product.visible)
            .bind(product.display_order)
            .bind(SqlxTimestamp::from(product.updated_at))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete(&self, uuid: ProductUuid) -> Result<u64, StoreError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: String = row.try_get("category")?;
        let category =
            ProductCategory::from_str(&category).map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: row.try_get::<Decimal, _>("price")?,
            category,
            visible: row.try_get("visible")?,
            display_order: row.try_get("display_order")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
