//! Database models for water usage records.

use crate::types::UserId;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Database request for logging a usage record
#[derive(Debug, Clone)]
pub struct WaterUsageCreateDBRequest {
    pub user_id: UserId,
    pub task: String,
    pub water_amount: Decimal,
    pub date: NaiveDate,
}

/// Database response for a usage record
#[derive(Debug, Clone)]
pub struct WaterUsageDBResponse {
    pub id: i64,
    pub user_id: UserId,
    pub task: String,
    pub water_amount: Decimal,
    pub date: NaiveDate,
}
