use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Payment;

const COLUMNS: &str = "id, investor_id, amount, note, proof_path, paid_at, created_at";

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(&format!(
        "SELECT {COLUMNS} FROM payment_history ORDER BY paid_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_investor(pool: &PgPool, investor_id: Uuid) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(&format!(
        "SELECT {COLUMNS} FROM payment_history WHERE investor_id = $1 ORDER BY paid_at DESC"
    ))
    .bind(investor_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(&format!(
        "SELECT {COLUMNS} FROM payment_history WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Payment) -> Result<Payment, sqlx::Error> {
    sqlx::query_as::<_, Payment>(&format!(
        "INSERT INTO payment_history (id, investor_id, amount, note, proof_path, paid_at, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.investor_id)
    .bind(input.amount)
    .bind(input.note)
    .bind(input.proof_path)
    .bind(input.paid_at)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn set_proof_path(
    pool: &PgPool,
    id: Uuid,
    proof_path: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(&format!(
        "UPDATE payment_history SET proof_path = $1 WHERE id = $2 RETURNING {COLUMNS}"
    ))
    .bind(proof_path)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM payment_history WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
