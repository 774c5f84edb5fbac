use axum::extract::{Path, State};
use axum::routing::{delete, post};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CreateUser, User};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(fetch_users))
        .route("/:id", delete(delete_user))
}

pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(data): Json<CreateUser>,
) -> Result<Json<User>, AppError> {
    auth.require_admin()?;
    info!("POST /users - Creating new user");
    let user = services::user_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "user",
        Some(user.id),
        Some(user.username.clone()),
    )
    .await;
    Ok(Json(user))
}

pub async fn fetch_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    auth.require_admin()?;
    info!("GET /users - Fetching all users");
    let users = services::user_service::fetch_all(&state.pool).await?;
    Ok(Json(users))
}

pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /users/{} - Deleting user", id);
    if id == auth.user_id {
        return Err(AppError::Validation("Cannot delete your own account".into()));
    }
    services::user_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete user {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "user",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}
