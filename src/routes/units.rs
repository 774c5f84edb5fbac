use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CreateUnit, Unit, UpdateUnit};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_unit).get(fetch_units))
        .route("/:id", get(get_unit))
        .route("/:id", put(update_unit))
        .route("/:id", delete(delete_unit))
}

pub async fn create_unit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(data): Json<CreateUnit>,
) -> Result<Json<Unit>, AppError> {
    auth.require_admin()?;
    info!("POST /units - Creating new unit");
    let unit = services::unit_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create unit: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "unit",
        Some(unit.id),
        Some(unit.name.clone()),
    )
    .await;
    Ok(Json(unit))
}

pub async fn fetch_units(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Unit>>, AppError> {
    auth.require_admin()?;
    info!("GET /units - Fetching all units");
    let units = services::unit_service::fetch_all(&state.pool).await?;
    Ok(Json(units))
}

pub async fn get_unit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Unit>, AppError> {
    auth.require_admin()?;
    info!("GET /units/{} - Fetching unit", id);
    let unit = services::unit_service::fetch_one(&state.pool, id).await?;
    Ok(Json(unit))
}

pub async fn update_unit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateUnit>,
) -> Result<Json<Unit>, AppError> {
    auth.require_admin()?;
    info!("PUT /units/{} - Updating unit", id);
    let unit = services::unit_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update unit {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "UPDATE",
        "unit",
        Some(id),
        None,
    )
    .await;
    Ok(Json(unit))
}

pub async fn delete_unit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /units/{} - Deleting unit", id);
    services::unit_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete unit {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "unit",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}
