use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CreatePayment, Payment};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment).get(fetch_payments))
        .route("/:id", get(get_payment))
        .route("/:id", delete(delete_payment))
        .route("/:id/proof", post(upload_proof))
        // Axum caps bodies at 2 MB by default; proofs go up to 5 MB.
        .layer(DefaultBodyLimit::max(
            services::upload_service::PROOF_BODY_LIMIT,
        ))
}

pub async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(data): Json<CreatePayment>,
) -> Result<Json<Payment>, AppError> {
    auth.require_admin()?;
    info!("POST /payments - Recording payment");
    let payment = services::payment_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to record payment: {}", e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "CREATE",
        "payment",
        Some(payment.id),
        None,
    )
    .await;
    Ok(Json(payment))
}

pub async fn fetch_payments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Payment>>, AppError> {
    auth.require_admin()?;
    info!("GET /payments - Fetching all payments");
    let payments = services::payment_service::fetch_all(&state.pool).await?;
    Ok(Json(payments))
}

pub async fn get_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Payment>, AppError> {
    auth.require_admin()?;
    info!("GET /payments/{} - Fetching payment", id);
    let payment = services::payment_service::fetch_one(&state.pool, id).await?;
    Ok(Json(payment))
}

// Stores the proof file first, then records its name on the payment row;
// the payment must already exist.
pub async fn upload_proof(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<Payment>, AppError> {
    auth.require_admin()?;
    info!("POST /payments/{}/proof - Uploading payment proof", id);
    services::payment_service::fetch_one(&state.pool, id).await?;
    let file_name = services::upload_service::save_payment_proof(&state.upload_dir, multipart)
        .await
        .map_err(|e| {
            error!("Failed to store proof for payment {}: {}", id, e);
            e
        })?;
    let payment = services::payment_service::attach_proof(&state.pool, id, &file_name).await?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "UPLOAD_PROOF",
        "payment",
        Some(id),
        Some(file_name),
    )
    .await;
    Ok(Json(payment))
}

pub async fn delete_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    auth.require_admin()?;
    info!("DELETE /payments/{} - Deleting payment", id);
    services::payment_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete payment {}: {}", id, e);
            e
        })?;
    services::activity_log_service::record(
        &state.pool,
        Some(auth.user_id),
        "DELETE",
        "payment",
        Some(id),
        None,
    )
    .await;
    Ok(Json(()))
}
