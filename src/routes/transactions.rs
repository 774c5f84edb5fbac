use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{
    Cost, CreateCost, CreateTransaction, ProfitSharing, Transaction, UpdateTransaction,
};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaction).get(fetch_transactions))
        .route("/:id", get(get_transaction))
        .route("/:id", put(update_transaction))
        .route("/:id", delete(delete_transaction))
        .route("/:id/costs", post(add_cost).get(fetch_costs))
        .route("/:id/profit-sharing", get(get_profit_sharing))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(data): Json<CreateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    auth.require_admin()?;
    info!("POST /transactions - Creating new transaction");
    let transaction = services::transaction_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create transaction: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "transaction",
        Some(transaction.id),
        None,
    )
    .await;
    Ok(Json(transaction))
}

pub async fn fetch_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Transaction>>, AppError> {
    auth.require_admin()?;
    info!("GET /transactions - Fetching all transactions");
    let transactions = services::transaction_service::fetch_all(&state.pool).await?;
    Ok(Json(transactions))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Transaction>, AppError> {
    auth.require_admin()?;
    info!("GET /transactions/{} - Fetching transaction", id);
    let transaction = services::transaction_service::fetch_one(&state.pool, id).await?;
    Ok(Json(transaction))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    auth.require_admin()?;
    info!("PUT /transactions/{} - Updating transaction", id);
    let status = data.status;
    let transaction = services::transaction_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update transaction {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "UPDATE",
        "transaction",
        Some(id),
        Some(format!("status={}", status.as_str())),
    )
    .await;
    Ok(Json(transaction))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /transactions/{} - Deleting transaction", id);
    services::transaction_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete transaction {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "transaction",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}

pub async fn get_profit_sharing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfitSharing>, AppError> {
    auth.require_admin()?;
    info!("GET /transactions/{}/profit-sharing - Fetching profit split", id);
    let sharing = services::transaction_service::fetch_profit_sharing(&state.pool, id).await?;
    Ok(Json(sharing))
}

pub async fn add_cost(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateCost>,
) -> Result<Json<Cost>, AppError> {
    auth.require_admin()?;
    info!("POST /transactions/{}/costs - Adding cost", id);
    let cost = services::cost_service::create(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to add cost to transaction {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "cost",
        Some(cost.id),
        None,
    )
    .await;
    Ok(Json(cost))
}

pub async fn fetch_costs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Cost>>, AppError> {
    auth.require_admin()?;
    info!("GET /transactions/{}/costs - Fetching costs", id);
    let costs = services::cost_service::fetch_by_transaction(&state.pool, id).await?;
    Ok(Json(costs))
}
