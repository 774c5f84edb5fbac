use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateInvestor, Investor, UpdateInvestor};

fn validate_margin(margin: &BigDecimal) -> Result<(), AppError> {
    if *margin < BigDecimal::from(0) || *margin > BigDecimal::from(100) {
        return Err(AppError::Validation(
            "Margin percentage must be between 0 and 100".into(),
        ));
    }
    Ok(())
}

async fn validate_user_link(pool: &PgPool, user_id: Option<Uuid>) -> Result<(), AppError> {
    if let Some(user_id) = user_id {
        if !db::user_queries::exists(pool, user_id).await? {
            return Err(AppError::Validation("Linked user does not exist".into()));
        }
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: CreateInvestor) -> Result<Investor, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Investor name cannot be empty".into()));
    }
    validate_margin(&input.margin_percentage)?;
    validate_user_link(pool, input.user_id).await?;

    let investor = Investor::new(input);
    let investor = db::investor_queries::insert(pool, investor).await?;
    Ok(investor)
}

pub async fn update(pool: &PgPool, id: Uuid, input: UpdateInvestor) -> Result<Investor, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Investor name cannot be empty".into()));
    }
    validate_margin(&input.margin_percentage)?;
    validate_user_link(pool, input.user_id).await?;

    let investor = db::investor_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound("Investor not found".to_string()))?;
    Ok(investor)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Investor>, AppError> {
    let investors = db::investor_queries::fetch_all(pool).await?;
    Ok(investors)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Investor, AppError> {
    let investor = db::investor_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Investor not found".to_string()))?;
    Ok(investor)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    match db::investor_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Investor not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_bounds_are_inclusive() {
        assert!(validate_margin(&BigDecimal::from(0)).is_ok());
        assert!(validate_margin(&BigDecimal::from(100)).is_ok());
        assert!(validate_margin(&BigDecimal::from(101)).is_err());
        assert!(validate_margin(&BigDecimal::from(-1)).is_err());
    }
}
