use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Cost, CreateCost, TransactionStatus};

pub async fn create(
    pool: &PgPool,
    transaction_id: Uuid,
    input: CreateCost,
) -> Result<Cost, AppError> {
    if input.description.trim().is_empty() {
        return Err(AppError::Validation("Cost description cannot be empty".into()));
    }
    if input.amount <= BigDecimal::from(0) {
        return Err(AppError::Validation("Cost amount must be positive".into()));
    }
    let transaction = db::transaction_queries::fetch_one(pool, transaction_id)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;
    if TransactionStatus::parse(&transaction.status) == Some(TransactionStatus::Completed) {
        return Err(AppError::Validation(
            "Costs cannot be added to a completed transaction".into(),
        ));
    }

    let cost = Cost::new(transaction_id, input);
    let cost = db::cost_queries::insert(pool, cost).await?;
    Ok(cost)
}

pub async fn fetch_by_transaction(
    pool: &PgPool,
    transaction_id: Uuid,
) -> Result<Vec<Cost>, AppError> {
    if db::transaction_queries::fetch_one(pool, transaction_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Transaction not found".to_string()));
    }
    let costs = db::cost_queries::fetch_by_transaction(pool, transaction_id).await?;
    Ok(costs)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    let cost = db::cost_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Cost not found".to_string()))?;
    let transaction = db::transaction_queries::fetch_one(pool, cost.transaction_id)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;
    if TransactionStatus::parse(&transaction.status) == Some(TransactionStatus::Completed) {
        return Err(AppError::Validation(
            "Costs cannot be removed from a completed transaction".into(),
        ));
    }
    match db::cost_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Cost not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}
