//! Database models for reward entries.

use crate::types::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Database request for awarding points
#[derive(Debug, Clone)]
pub struct RewardCreateDBRequest {
    pub user_id: UserId,
    /// Signed; excessive usage yields negative points
    pub points: Decimal,
    pub reward_date: DateTime<Utc>,
}

/// Database response for a reward entry
#[derive(Debug, Clone)]
pub struct RewardDBResponse {
    pub id: i64,
    pub user_id: UserId,
    pub points: Decimal,
    pub reward_date: DateTime<Utc>,
}
