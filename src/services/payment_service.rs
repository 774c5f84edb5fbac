use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreatePayment, Payment};

pub async fn create(pool: &PgPool, input: CreatePayment) -> Result<Payment, AppError> {
    if input.amount <= BigDecimal::from(0) {
        return Err(AppError::Validation("Payment amount must be positive".into()));
    }
    if !db::investor_queries::exists(pool, input.investor_id).await? {
        return Err(AppError::Validation("Investor does not exist".into()));
    }

    let payment = Payment::new(input);
    let payment = db::payment_queries::insert(pool, payment).await?;
    Ok(payment)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Payment>, AppError> {
    let payments = db::payment_queries::fetch_all(pool).await?;
    Ok(payments)
}

pub async fn fetch_by_investor(pool: &PgPool, investor_id: Uuid) -> Result<Vec<Payment>, AppError> {
    if !db::investor_queries::exists(pool, investor_id).await? {
        return Err(AppError::NotFound("Investor not found".to_string()));
    }
    let payments = db::payment_queries::fetch_by_investor(pool, investor_id).await?;
    Ok(payments)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Payment, AppError> {
    let payment = db::payment_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;
    Ok(payment)
}

pub async fn attach_proof(pool: &PgPool, id: Uuid, proof_path: &str) -> Result<Payment, AppError> {
    let payment = db::payment_queries::set_proof_path(pool, id, proof_path)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;
    Ok(payment)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    match db::payment_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Payment not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}
