use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CreateInvestor, Investor, Payment, Role, UpdateInvestor};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_investor).get(fetch_investors))
        .route("/:id", get(get_investor))
        .route("/:id", put(update_investor))
        .route("/:id", delete(delete_investor))
        .route("/:id/payments", get(investor_payments))
}

pub async fn create_investor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(data): Json<CreateInvestor>,
) -> Result<Json<Investor>, AppError> {
    auth.require_admin()?;
    info!("POST /investors - Creating new investor");
    let investor = services::investor_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create investor: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "investor",
        Some(investor.id),
        Some(investor.name.clone()),
    )
    .await;
    Ok(Json(investor))
}

pub async fn fetch_investors(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Investor>>, AppError> {
    auth.require_admin()?;
    info!("GET /investors - Fetching all investors");
    let investors = services::investor_service::fetch_all(&state.pool).await?;
    Ok(Json(investors))
}

pub async fn get_investor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Investor>, AppError> {
    auth.require_admin()?;
    info!("GET /investors/{} - Fetching investor", id);
    let investor = services::investor_service::fetch_one(&state.pool, id).await?;
    Ok(Json(investor))
}

pub async fn update_investor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateInvestor>,
) -> Result<Json<Investor>, AppError> {
    auth.require_admin()?;
    info!("PUT /investors/{} - Updating investor", id);
    let investor = services::investor_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update investor {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "UPDATE",
        "investor",
        Some(id),
        None,
    )
    .await;
    Ok(Json(investor))
}

pub async fn delete_investor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /investors/{} - Deleting investor", id);
    services::investor_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete investor {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "investor",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}

// Admins see anyone's payments; an investor login only its own.
pub async fn investor_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Payment>>, AppError> {
    info!("GET /investors/{}/payments - Fetching payment history", id);
    if auth.role != Role::Admin {
        let linked = crate::db::investor_queries::find_by_user(&state.pool, auth.user_id).await?;
        match linked {
            Some(investor) if investor.id == id => {}
            _ => return Err(AppError::Forbidden),
        }
    }
    let payments = services::payment_service::fetch_by_investor(&state.pool, id).await?;
    Ok(Json(payments))
}
