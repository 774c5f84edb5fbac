use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Unit, UpdateUnit};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "SELECT id, investor_id, name, brand, year, plate_number, status, created_at
         FROM units
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "SELECT id, investor_id, name, brand, year, plate_number, status, created_at
         FROM units
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Unit) -> Result<Unit, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "INSERT INTO units (id, investor_id, name, brand, year, plate_number, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING id, investor_id, name, brand, year, plate_number, status, created_at",
    )
    .bind(input.id)
    .bind(input.investor_id)
    .bind(input.name)
    .bind(input.brand)
    .bind(input.year)
    .bind(input.plate_number)
    .bind(input.status)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: Uuid, input: UpdateUnit) -> Result<Option<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "UPDATE units
         SET name = $1, brand = $2, year = $3, plate_number = $4, status = $5
         WHERE id = $6
         RETURNING id, investor_id, name, brand, year, plate_number, status, created_at",
    )
    .bind(input.name)
    .bind(input.brand)
    .bind(input.year)
    .bind(input.plate_number)
    .bind(input.status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM units WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

// Kept as its own count query rather than derived from a loaded list; the
// dashboard tolerates the (benign) point-in-time skew between the two reads.
pub async fn count_by_investor(pool: &PgPool, investor_id: Uuid) -> Result<i64, sqlx::Error> {
    let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM units WHERE investor_id = $1")
        .bind(investor_id)
        .fetch_one(pool)
        .await?;
    Ok(result.0)
}

pub async fn mark_sold(
    conn: &mut sqlx::PgConnection,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE units SET status = 'SOLD' WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
