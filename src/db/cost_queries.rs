use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Cost;

pub async fn fetch_by_transaction(
    pool: &PgPool,
    transaction_id: Uuid,
) -> Result<Vec<Cost>, sqlx::Error> {
    sqlx::query_as::<_, Cost>(
        "SELECT id, transaction_id, description, amount, created_at
         FROM costs
         WHERE transaction_id = $1
         ORDER BY created_at ASC",
    )
    .bind(transaction_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Cost) -> Result<Cost, sqlx::Error> {
    sqlx::query_as::<_, Cost>(
        "INSERT INTO costs (id, transaction_id, description, amount, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, transaction_id, description, amount, created_at",
    )
    .bind(input.id)
    .bind(input.transaction_id)
    .bind(input.description)
    .bind(input.amount)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Cost>, sqlx::Error> {
    sqlx::query_as::<_, Cost>(
        "SELECT id, transaction_id, description, amount, created_at
         FROM costs
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM costs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

// Total booked against a transaction; NULL when no rows, hence COALESCE.
pub async fn sum_by_transaction(
    conn: &mut sqlx::PgConnection,
    transaction_id: Uuid,
) -> Result<BigDecimal, sqlx::Error> {
    let result: (BigDecimal,) =
        sqlx::query_as("SELECT COALESCE(SUM(amount), 0) FROM costs WHERE transaction_id = $1")
            .bind(transaction_id)
            .fetch_one(&mut *conn)
            .await?;
    Ok(result.0)
}
