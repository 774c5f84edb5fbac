use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, User};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!("POST /auth/login - Login attempt for '{}'", data.username);
    let response = services::user_service::login(&state.pool, &state.auth, data)
        .await
        .map_err(|e| {
            error!("Login failed: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(response.user.id),
        "LOGIN",
        "user",
        Some(response.user.id),
        None,
    )
    .await;
    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<User>, AppError> {
    info!("GET /auth/me - Fetching current user");
    let user = services::user_service::fetch_one(&state.pool, auth.user_id).await?;
    Ok(Json(user))
}
