//! OpenAPI documentation for the `/api/*` endpoints.
//!
//! Served as JSON at `/api/openapi.json` and rendered with Scalar at `/api/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aquatrack API",
        description = "Register users, log water usage against per-task standards and track reward points."
    ),
    paths(
        api::handlers::auth::register,
        api::handlers::auth::login,
        api::handlers::water_usage::log_water_usage,
        api::handlers::rewards::get_total_rewards,
    ),
    components(
        schemas(
            api::models::auth::RegisterRequest,
            api::models::auth::RegisterResponse,
            api::models::auth::LoginRequest,
            api::models::auth::LoginResponse,
            api::models::water_usage::LogWaterUsageRequest,
            api::models::water_usage::LogWaterUsageResponse,
            api::models::rewards::TotalRewardsRequest,
            api::models::rewards::TotalRewardsResponse,
        )
    ),
    tags(
        (name = "authentication", description = "Account registration and credential checks."),
        (name = "water_usage", description = "Log usage entries. Each entry is scored against the task's standard amount."),
        (name = "rewards", description = "Cumulative reward points per user."),
    )
)]
pub struct ApiDoc;
