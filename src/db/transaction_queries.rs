use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Transaction, UpdateTransaction};

const COLUMNS: &str =
    "id, unit_id, buyer_name, buy_price, sell_price, initial_investor_capital, status, created_at";

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(&format!(
        "SELECT {COLUMNS} FROM transactions ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(&format!(
        "SELECT {COLUMNS} FROM transactions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Transaction) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(&format!(
        "INSERT INTO transactions
             (id, unit_id, buyer_name, buy_price, sell_price, initial_investor_capital, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.unit_id)
    .bind(input.buyer_name)
    .bind(input.buy_price)
    .bind(input.sell_price)
    .bind(input.initial_investor_capital)
    .bind(input.status)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update_fields(
    conn: &mut sqlx::PgConnection,
    id: Uuid,
    input: &UpdateTransaction,
) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(&format!(
        "UPDATE transactions
         SET buyer_name = $1, buy_price = $2, sell_price = $3,
             initial_investor_capital = $4, status = $5
         WHERE id = $6
         RETURNING {COLUMNS}"
    ))
    .bind(&input.buyer_name)
    .bind(&input.buy_price)
    .bind(&input.sell_price)
    .bind(&input.initial_investor_capital)
    .bind(input.status.as_str())
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
