use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Investor, UpdateInvestor};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "SELECT id, name, phone, address, margin_percentage, user_id, created_at
         FROM investors
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "SELECT id, name, phone, address, margin_percentage, user_id, created_at
         FROM investors
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "SELECT id, name, phone, address, margin_percentage, user_id, created_at
         FROM investors
         WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Investor) -> Result<Investor, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "INSERT INTO investors (id, name, phone, address, margin_percentage, user_id, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, name, phone, address, margin_percentage, user_id, created_at",
    )
    .bind(input.id)
    .bind(input.name)
    .bind(input.phone)
    .bind(input.address)
    .bind(input.margin_percentage)
    .bind(input.user_id)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateInvestor,
) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "UPDATE investors
         SET name = $1, phone = $2, address = $3, margin_percentage = $4, user_id = $5
         WHERE id = $6
         RETURNING id, name, phone, address, margin_percentage, user_id, created_at",
    )
    .bind(input.name)
    .bind(input.phone)
    .bind(input.address)
    .bind(input.margin_percentage)
    .bind(input.user_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM investors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM investors WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(result.0)
}

// Owning investor's id and configured profit share for a unit, resolved
// inside the completion transaction.
pub async fn margin_for_unit(
    conn: &mut sqlx::PgConnection,
    unit_id: Uuid,
) -> Result<Option<(Uuid, bigdecimal::BigDecimal)>, sqlx::Error> {
    sqlx::query_as(
        "SELECT i.id, i.margin_percentage
         FROM investors i
         JOIN units u ON u.investor_id = i.id
         WHERE u.id = $1",
    )
    .bind(unit_id)
    .fetch_optional(&mut *conn)
    .await
}
