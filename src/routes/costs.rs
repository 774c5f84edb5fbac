use axum::extract::{Path, State};
use axum::routing::delete;
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", delete(delete_cost))
}

pub async fn delete_cost(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /costs/{} - Deleting cost", id);
    services::cost_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete cost {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "cost",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}
