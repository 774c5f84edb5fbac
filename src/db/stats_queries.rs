use bigdecimal::BigDecimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

// Per-unit capital inputs: each unit paired with its first-loaded
// transaction (oldest by created_at, id as tie-break). Units without a
// transaction come back with NULL price columns.
#[derive(Debug, Clone, FromRow)]
pub struct UnitCapitalRow {
    pub status: String,
    pub buy_price: Option<BigDecimal>,
    pub initial_investor_capital: Option<BigDecimal>,
}

pub async fn fetch_unit_capital_rows(
    pool: &PgPool,
    investor_id: Uuid,
) -> Result<Vec<UnitCapitalRow>, sqlx::Error> {
    sqlx::query_as::<_, UnitCapitalRow>(
        "SELECT
           u.status,
           t.buy_price,
           t.initial_investor_capital
         FROM units u
         LEFT JOIN LATERAL (
           SELECT buy_price, initial_investor_capital
           FROM transactions
           WHERE unit_id = u.id
           ORDER BY created_at ASC, id ASC
           LIMIT 1
         ) t ON TRUE
         WHERE u.investor_id = $1
         ORDER BY u.created_at ASC",
    )
    .bind(investor_id)
    .fetch_all(pool)
    .await
}

// Every transaction on the investor's units, with the realized investor
// profit where the split record exists.
#[derive(Debug, Clone, FromRow)]
pub struct InvestorTransactionRow {
    pub id: Uuid,
    pub unit_id: Uuid,
    pub buyer_name: String,
    pub buy_price: BigDecimal,
    pub sell_price: BigDecimal,
    pub status: String,
    pub investor_profit_amount: Option<BigDecimal>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn fetch_investor_transactions(
    pool: &PgPool,
    investor_id: Uuid,
) -> Result<Vec<InvestorTransactionRow>, sqlx::Error> {
    sqlx::query_as::<_, InvestorTransactionRow>(
        "SELECT
           t.id,
           t.unit_id,
           t.buyer_name,
           t.buy_price,
           t.sell_price,
           t.status,
           ps.investor_profit_amount,
           t.created_at
         FROM transactions t
         JOIN units u ON t.unit_id = u.id
         LEFT JOIN profit_sharing ps ON ps.transaction_id = t.id
         WHERE u.investor_id = $1
         ORDER BY t.created_at ASC, t.id ASC",
    )
    .bind(investor_id)
    .fetch_all(pool)
    .await
}

#[derive(Debug, Clone, FromRow)]
pub struct StatusCountRow {
    pub status: String,
    pub count: i64,
}

pub async fn count_units_by_status(pool: &PgPool) -> Result<Vec<StatusCountRow>, sqlx::Error> {
    sqlx::query_as::<_, StatusCountRow>(
        "SELECT status, COUNT(*) AS count
         FROM units
         GROUP BY status
         ORDER BY status ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_transactions_by_status(
    pool: &PgPool,
) -> Result<Vec<StatusCountRow>, sqlx::Error> {
    sqlx::query_as::<_, StatusCountRow>(
        "SELECT status, COUNT(*) AS count
         FROM transactions
         GROUP BY status
         ORDER BY status ASC",
    )
    .fetch_all(pool)
    .await
}

// Capital across every unit in the system, same override-else-buy-price
// rule as the per-investor read.
pub async fn total_capital(pool: &PgPool) -> Result<BigDecimal, sqlx::Error> {
    let result: (BigDecimal,) = sqlx::query_as(
        "SELECT COALESCE(SUM(COALESCE(t.initial_investor_capital, t.buy_price)), 0)
         FROM units u
         LEFT JOIN LATERAL (
           SELECT buy_price, initial_investor_capital
           FROM transactions
           WHERE unit_id = u.id
           ORDER BY created_at ASC, id ASC
           LIMIT 1
         ) t ON TRUE",
    )
    .fetch_one(pool)
    .await?;
    Ok(result.0)
}

pub async fn total_profit_split(pool: &PgPool) -> Result<(BigDecimal, BigDecimal), sqlx::Error> {
    let result: (BigDecimal, BigDecimal) = sqlx::query_as(
        "SELECT
           COALESCE(SUM(investor_profit_amount), 0),
           COALESCE(SUM(manager_profit_amount), 0)
         FROM profit_sharing",
    )
    .fetch_one(pool)
    .await?;
    Ok(result)
}
