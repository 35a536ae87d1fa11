//! Database repository for reward entries.

use crate::db::{
    errors::Result,
    models::rewards::{RewardCreateDBRequest, RewardDBResponse},
};
use crate::types::{UserId, abbrev_uuid};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

#[derive(Debug, Clone, FromRow)]
struct Reward {
    pub id: i64,
    pub user_id: UserId,
    pub points: Decimal,
    pub reward_date: DateTime<Utc>,
}

impl From<Reward> for RewardDBResponse {
    fn from(reward: Reward) -> Self {
        Self {
            id: reward.id,
            user_id: reward.user_id,
            points: reward.points,
            reward_date: reward.reward_date,
        }
    }
}

pub struct Rewards<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Rewards<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id), points = %request.points), err)]
    pub async fn create(&mut self, request: &RewardCreateDBRequest) -> Result<RewardDBResponse> {
        let reward = sqlx::query_as::<_, Reward>(
            r#"
            INSERT INTO rewards (user_id, points, reward_date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, points, reward_date
            "#,
        )
        .bind(request.user_id)
        .bind(request.points)
        .bind(request.reward_date)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(RewardDBResponse::from(reward))
    }

    /// Sum of all points awarded to a user. Users with no entries total zero.
    #[instrument(skip(self), fields(user_id = %abbrev_uuid(&user_id)), err)]
    pub async fn get_total_points(&mut self, user_id: UserId) -> Result<Decimal> {
        let total = sqlx::query_scalar::<_, Decimal>("SELECT COALESCE(SUM(points), 0) FROM rewards WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(total)
    }
}
