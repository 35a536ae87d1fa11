use crate::scoring::WaterAmountInput;
use crate::types::UserId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Request models
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogWaterUsageRequest {
    #[schema(value_type = String, format = "uuid")]
    pub user_id: UserId,
    /// Task name, must match a known task standard exactly
    pub task: String,
    /// Observed amount as a number or numeric string, e.g. `40` or `"40.5"`
    #[schema(value_type = f64, minimum = 0)]
    pub water_amount: WaterAmountInput,
    /// Calendar date of the usage (`YYYY-MM-DD`)
    pub date: NaiveDate,
}

// Response models
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogWaterUsageResponse {
    pub message: String,
    /// Feedback text for how the amount compares to the standard
    pub usage_feedback: String,
    /// Standard amount for the task
    #[serde(rename = "standardAmount", with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub standard_amount: Decimal,
    /// Points awarded for this entry, negative for excessive usage
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub points: Decimal,
}
