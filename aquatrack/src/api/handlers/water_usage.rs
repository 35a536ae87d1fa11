use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::{
    AppState,
    api::models::water_usage::{LogWaterUsageRequest, LogWaterUsageResponse},
    db::{
        handlers::{Rewards, TaskStandards, WaterUsage},
        models::{rewards::RewardCreateDBRequest, water_usage::WaterUsageCreateDBRequest},
    },
    errors::Error,
    scoring,
};

/// Log a usage entry, score it against the task standard and award the points.
///
/// The usage record and its reward entry are written in one transaction; if any step fails
/// neither row is kept.
#[utoipa::path(
    post,
    path = "/api/log-water-usage",
    request_body = LogWaterUsageRequest,
    tag = "water_usage",
    responses(
        (status = 201, description = "Water usage logged successfully", body = LogWaterUsageResponse),
        (status = 400, description = "Water amount is not a non-negative number or is too large to score"),
        (status = 404, description = "Task not found in standards"),
        (status = 500, description = "Failed to fetch standard amount, log water usage or log reward"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn log_water_usage(
    State(state): State<AppState>,
    Json(request): Json<LogWaterUsageRequest>,
) -> Result<(StatusCode, Json<LogWaterUsageResponse>), Error> {
    let water_amount = request.water_amount.parse()?;

    let mut tx = state.db.begin().await.map_err(Error::storage("Failed to fetch standard amount"))?;

    let standard = TaskStandards::new(&mut tx)
        .get_by_task_name(&request.task)
        .await
        .map_err(Error::storage("Failed to fetch standard amount"))?
        .ok_or_else(|| Error::NotFound {
            message: "Task not found in standards".to_string(),
        })?;

    let score = scoring::score(standard.standard_amount, water_amount)?;

    WaterUsage::new(&mut tx)
        .create(&WaterUsageCreateDBRequest {
            user_id: request.user_id,
            task: request.task,
            water_amount,
            date: request.date,
        })
        .await
        .map_err(Error::storage("Failed to log water usage"))?;

    Rewards::new(&mut tx)
        .create(&RewardCreateDBRequest {
            user_id: request.user_id,
            points: score.points,
            reward_date: Utc::now(),
        })
        .await
        .map_err(Error::storage("Failed to log reward"))?;

    tx.commit().await.map_err(Error::storage("Failed to log reward"))?;

    Ok((
        StatusCode::CREATED,
        Json(LogWaterUsageResponse {
            message: "Water usage logged successfully".to_string(),
            usage_feedback: score.feedback.message().to_string(),
            standard_amount: standard.standard_amount,
            points: score.points,
        }),
    ))
}
