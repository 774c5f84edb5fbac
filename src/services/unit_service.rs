use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateUnit, Unit, UpdateUnit};

pub async fn create(pool: &PgPool, input: CreateUnit) -> Result<Unit, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Unit name cannot be empty".into()));
    }
    if !db::investor_queries::exists(pool, input.investor_id).await? {
        return Err(AppError::Validation("Investor does not exist".into()));
    }

    let unit = Unit::new(input);
    let unit = db::unit_queries::insert(pool, unit).await?;
    Ok(unit)
}

pub async fn update(pool: &PgPool, id: Uuid, input: UpdateUnit) -> Result<Unit, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Unit name cannot be empty".into()));
    }
    let unit = db::unit_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound("Unit not found".to_string()))?;
    Ok(unit)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Unit>, AppError> {
    let units = db::unit_queries::fetch_all(pool).await?;
    Ok(units)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Unit, AppError> {
    let unit = db::unit_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Unit not found".to_string()))?;
    Ok(unit)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    match db::unit_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Unit not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}
