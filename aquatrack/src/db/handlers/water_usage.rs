//! Database repository for water usage records.

use crate::db::{
    errors::Result,
    models::water_usage::{WaterUsageCreateDBRequest, WaterUsageDBResponse},
};
use crate::types::{UserId, abbrev_uuid};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

#[derive(Debug, Clone, FromRow)]
struct WaterUsageRecord {
    pub id: i64,
    pub user_id: UserId,
    pub task: String,
    pub water_amount: Decimal,
    pub date: NaiveDate,
}

impl From<WaterUsageRecord> for WaterUsageDBResponse {
    fn from(record: WaterUsageRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            task: record.task,
            water_amount: record.water_amount,
            date: record.date,
        }
    }
}

pub struct WaterUsage<'c> {
    db: &'c mut PgConnection,
}

impl<'c> WaterUsage<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id), task = %request.task), err)]
    pub async fn create(&mut self, request: &WaterUsageCreateDBRequest) -> Result<WaterUsageDBResponse> {
        let record = sqlx::query_as::<_, WaterUsageRecord>(
            r#"
            INSERT INTO water_usage (user_id, task, water_amount, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, task, water_amount, date
            "#,
        )
        .bind(request.user_id)
        .bind(&request.task)
        .bind(request.water_amount)
        .bind(request.date)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(WaterUsageDBResponse::from(record))
    }
}
