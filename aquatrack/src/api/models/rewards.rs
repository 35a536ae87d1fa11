use crate::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalRewardsRequest {
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalRewardsResponse {
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
    /// Sum of every reward entry for the user, zero if there are none
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_points: Decimal,
}
