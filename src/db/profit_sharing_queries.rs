use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ProfitSharing;

pub async fn insert(
    conn: &mut sqlx::PgConnection,
    input: ProfitSharing,
) -> Result<ProfitSharing, sqlx::Error> {
    sqlx::query_as::<_, ProfitSharing>(
        "INSERT INTO profit_sharing
             (id, transaction_id, investor_share_percentage, manager_share_percentage,
              investor_profit_amount, manager_profit_amount, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, transaction_id, investor_share_percentage, manager_share_percentage,
                   investor_profit_amount, manager_profit_amount, created_at",
    )
    .bind(input.id)
    .bind(input.transaction_id)
    .bind(input.investor_share_percentage)
    .bind(input.manager_share_percentage)
    .bind(input.investor_profit_amount)
    .bind(input.manager_profit_amount)
    .bind(input.created_at)
    .fetch_one(&mut *conn)
    .await
}

pub async fn fetch_by_transaction(
    pool: &PgPool,
    transaction_id: Uuid,
) -> Result<Option<ProfitSharing>, sqlx::Error> {
    sqlx::query_as::<_, ProfitSharing>(
        "SELECT id, transaction_id, investor_share_percentage, manager_share_percentage,
                investor_profit_amount, manager_profit_amount, created_at
         FROM profit_sharing
         WHERE transaction_id = $1",
    )
    .bind(transaction_id)
    .fetch_optional(pool)
    .await
}
