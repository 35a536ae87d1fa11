use axum::{Json, extract::State};

use crate::{
    AppState,
    api::models::rewards::{TotalRewardsRequest, TotalRewardsResponse},
    db::handlers::Rewards,
    errors::Error,
};

/// Total reward points for a user
#[utoipa::path(
    post,
    path = "/api/get-total-rewards",
    request_body = TotalRewardsRequest,
    tag = "rewards",
    responses(
        (status = 200, description = "Sum of the user's reward entries", body = TotalRewardsResponse),
        (status = 500, description = "Failed to fetch total reward points"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_total_rewards(
    State(state): State<AppState>,
    Json(request): Json<TotalRewardsRequest>,
) -> Result<Json<TotalRewardsResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(Error::storage("Failed to fetch total reward points"))?;
    let total_points = Rewards::new(&mut conn)
        .get_total_points(request.user_id)
        .await
        .map_err(Error::storage("Failed to fetch total reward points"))?;

    Ok(Json(TotalRewardsResponse {
        user_id: request.user_id,
        total_points,
    }))
}
