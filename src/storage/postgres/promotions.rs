//! Promotions store backed by PostgreSQL.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as};

use crate::{
    domain::{
        products::models::ProductUuid,
        promotions::{
            models::{Promotion, PromotionUuid},
            store::PromotionStore,
        },
        schedule::{DaysOfWeek, TimeWindow},
    },
    storage::StoreError,
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const GET_PROMOTION_SQL: &str = include_str!("sql/get_promotion.sql");
const INSERT_PROMOTION_SQL: &str = include_str!("sql/insert_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");
const DELETE_PROMOTIONS_BY_PRODUCT_SQL: &str = include_str!("sql/delete_promotions_by_product.sql");

/// Promotions store.
///
/// Listing orders by `created_at DESC`; that retrieval order doubles as
/// the first-match tie-break when promotions overlap.
#[derive(Debug, Clone)]
pub struct PgPromotionStore {
    pool: PgPool,
}

impl PgPromotionStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionStore for PgPromotionStore {
    async fn list(&self, product: Option<ProductUuid>) -> Result<Vec<Promotion>, StoreError> {
        let promotions = query_as::<_, Promotion>(LIST_PROMOTIONS_SQL)
            .bind(product.map(ProductUuid::into_uuid))
            .fetch_all(&self.pool)
            .await?;

        Ok(promotions)
    }

    async fn get(&self, uuid: PromotionUuid) -> Result<Option<Promotion>, StoreError> {
        let promotion = query_as::<_, Promotion>(GET_PROMOTION_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(promotion)
    }

    async fn insert(&self, promotion: Promotion) -> Result<(), StoreError> {
        query(INSERT_PROMOTION_SQL)
            .bind(promotion.uuid.into_uuid())
            .bind(promotion.product_uuid.into_uuid())
            .bind(&promotion.description)
            .bind(promotion.promotional_price)
            .bind(days_to_sql(promotion.days_of_week))
            .bind(promotion.window.start().to_string())
            .bind(promotion.window.end().to_string())
            .bind(SqlxTimestamp::from(promotion.created_at))
            .bind(SqlxTimestamp::from(promotion.updated_at))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, promotion: Promotion) -> Result<u64, StoreError> {
        let rows_affected = query(UPDATE_PROMOTION_SQL)
            .bind(promotion.uuid.into_uuid())
            .bind(&promotion.description)
            .bind(promotion.promotional_price)
            .bind(days_to_sql(promotion.days_of_week))
            .bind(promotion.window.start().to_string())
            .bind(promotion.window.end().to_string())
            .bind(SqlxTimestamp::from(promotion.updated_at))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete(&self, uuid: PromotionUuid) -> Result<u64, StoreError> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete_by_product(&self, product: ProductUuid) -> Result<u64, StoreError> {
        let rows_affected = query(DELETE_PROMOTIONS_BY_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn days_to_sql(days: DaysOfWeek) -> Vec<i16> {
    days.iter().map(i16::from).collect()
}

impl<'r> FromRow<'r, PgRow> for Promotion {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let days: Vec<i16> = row.try_get("days_of_week")?;
        let days: Vec<u8> = days
            .into_iter()
            .map(u8::try_from)
            .collect::<Result<_, _>>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "days_of_week".to_string(),
                source: Box::new(e),
            })?;
        let days_of_week =
            DaysOfWeek::new(&days).map_err(|e| sqlx::Error::ColumnDecode {
                index: "days_of_week".to_string(),
                source: Box::new(e),
            })?;

        let start: String = row.try_get("start_time")?;
        let end: String = row.try_get("end_time")?;
        let window = TimeWindow::parse(&start, &end).map_err(|e| sqlx::Error::ColumnDecode {
            index: "start_time".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: PromotionUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            description: row.try_get("description")?,
            promotional_price: row.try_get::<Decimal, _>("promotional_price")?,
            days_of_week,
            window,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
