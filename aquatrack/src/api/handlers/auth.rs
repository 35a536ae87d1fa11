use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    api::models::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    auth::password,
    db::{handlers::Users, models::users::UserCreateDBRequest},
    errors::Error,
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    tag = "authentication",
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Password length outside the configured bounds"),
        (status = 500, description = "Registration failed"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), Error> {
    let password_config = &state.config.auth.password;
    let length = request.password.chars().count();
    if length < password_config.min_length || length > password_config.max_length {
        return Err(Error::BadRequest {
            message: format!(
                "Password must be between {} and {} characters",
                password_config.min_length, password_config.max_length
            ),
        });
    }

    // Hash the password on a blocking thread to avoid blocking async runtime
    let params = password_config.argon2_params();
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || password::hash_string_with_params(&password, Some(params)))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    let mut conn = state.db.acquire().await.map_err(Error::storage("Registration failed"))?;
    let user = Users::new(&mut conn)
        .create(&UserCreateDBRequest {
            username: request.username,
            email: request.email,
            password_hash,
        })
        .await
        .map_err(Error::storage("Registration failed"))?;

    tracing::info!(user_id = %crate::types::abbrev_uuid(&user.id), "registered user");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Check a username and password, returning the user's id
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    tag = "authentication",
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect password"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(Error::storage("Server error"))?;
    let user = Users::new(&mut conn)
        .get_user_by_username(&request.username)
        .await
        .map_err(Error::storage("Server error"))?
        .ok_or_else(|| Error::NotFound {
            message: "User not found".to_string(),
        })?;
    drop(conn);

    // Verify password on a blocking thread to avoid blocking async runtime
    let password = request.password;
    let hash = user.password_hash;
    let is_valid = tokio::task::spawn_blocking(move || password::verify_string(&password, &hash))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password verification task: {e}"),
        })??;

    if !is_valid {
        return Err(Error::Unauthenticated {
            message: Some("Incorrect password".to_string()),
        });
    }

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: user.id,
    }))
}
