use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::AdminDashboard;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_dashboard))
        .route("/investor", get(investor_dashboard))
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AdminDashboard>, AppError> {
    auth.require_admin()?;
    info!("GET /dashboard/admin - Building admin dashboard");
    let dashboard = services::dashboard_service::admin(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to build admin dashboard: {}", e);
            e
        })?;
    Ok(Json(dashboard))
}

// A login without a linked investor row gets {"linked": false}, not an
// error; the frontend shows the not-linked state.
pub async fn investor_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("GET /dashboard/investor - Building investor dashboard");
    let dashboard = services::dashboard_service::for_user(&state.pool, auth.user_id)
        .await
        .map_err(|e| {
            error!("Failed to build investor dashboard: {}", e);
            e
        })?;
    match dashboard {
        Some(dashboard) => Ok(Json(json!({
            "linked": true,
            "investor": dashboard.investor,
            "stats": dashboard.stats,
            "recent_transactions": dashboard.recent_transactions,
        }))),
        None => Ok(Json(json!({ "linked": false }))),
    }
}
