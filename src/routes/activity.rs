use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::ActivityLog;
use crate::services;
use crate::state::AppState;

const LIST_LIMIT: i64 = 50;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_activity))
}

pub async fn fetch_activity(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ActivityLog>>, AppError> {
    auth.require_admin()?;
    info!("GET /activity - Fetching recent activity");
    let entries = services::activity_log_service::fetch_recent(&state.pool, LIST_LIMIT).await?;
    Ok(Json(entries))
}
