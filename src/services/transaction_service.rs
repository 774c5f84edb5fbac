use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{
    CreateTransaction, ProfitSharing, Transaction, TransactionStatus, UnitStatus,
    UpdateTransaction,
};

pub async fn create(pool: &PgPool, input: CreateTransaction) -> Result<Transaction, AppError> {
    if input.buy_price < BigDecimal::from(0) || input.sell_price < BigDecimal::from(0) {
        return Err(AppError::Validation("Prices cannot be negative".into()));
    }
    let unit = db::unit_queries::fetch_one(pool, input.unit_id)
        .await?
        .ok_or_else(|| AppError::Validation("Unit does not exist".into()))?;
    if UnitStatus::parse(&unit.status) == Some(UnitStatus::Sold) {
        return Err(AppError::Validation("Unit is already sold".into()));
    }

    let transaction = Transaction::new(input);
    let transaction = db::transaction_queries::insert(pool, transaction).await?;
    Ok(transaction)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Transaction>, AppError> {
    let transactions = db::transaction_queries::fetch_all(pool).await?;
    Ok(transactions)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Transaction, AppError> {
    let transaction = db::transaction_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;
    Ok(transaction)
}

/// Updates a transaction; once COMPLETED it is frozen and every further
/// update is rejected. Moving it to COMPLETED settles it: net profit is
/// computed (sell - buy - booked costs), split by the owning investor's
/// margin, the profit_sharing row inserted and the unit marked SOLD, all in
/// one SQL transaction.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateTransaction,
) -> Result<Transaction, AppError> {
    if input.buy_price < BigDecimal::from(0) || input.sell_price < BigDecimal::from(0) {
        return Err(AppError::Validation("Prices cannot be negative".into()));
    }

    let existing = db::transaction_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;
    ensure_editable(&existing.status)?;

    let mut tx = pool.begin().await?;

    let updated = db::transaction_queries::update_fields(&mut tx, id, &input)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;

    if input.status == TransactionStatus::Completed {
        let (_, margin) = db::investor_queries::margin_for_unit(&mut tx, updated.unit_id)
            .await?
            .ok_or_else(|| AppError::Validation("Unit has no owning investor".into()))?;
        let costs = db::cost_queries::sum_by_transaction(&mut tx, id).await?;

        let net = &updated.sell_price - &updated.buy_price - costs;
        let (investor_amount, manager_amount) = split_profit(&net, &margin);
        let sharing = ProfitSharing::new(
            id,
            margin.clone(),
            BigDecimal::from(100) - margin,
            investor_amount,
            manager_amount,
        );
        db::profit_sharing_queries::insert(&mut tx, sharing).await?;
        db::unit_queries::mark_sold(&mut tx, updated.unit_id).await?;
    }

    tx.commit().await?;
    Ok(updated)
}

/// The split record for a completed transaction; NotFound while the
/// transaction is still open.
pub async fn fetch_profit_sharing(pool: &PgPool, id: Uuid) -> Result<ProfitSharing, AppError> {
    if db::transaction_queries::fetch_one(pool, id).await?.is_none() {
        return Err(AppError::NotFound("Transaction not found".to_string()));
    }
    let sharing = db::profit_sharing_queries::fetch_by_transaction(pool, id)
        .await?
        .ok_or(AppError::NotFound(
            "Transaction has no profit sharing yet".to_string(),
        ))?;
    Ok(sharing)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    let existing = db::transaction_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("Transaction not found".to_string()))?;
    ensure_editable(&existing.status)?;
    match db::transaction_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Transaction not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}

/// A completed transaction is settled: its prices fed the profit split
/// already, so every later edit or delete is refused rather than risking a
/// stale profit_sharing row.
fn ensure_editable(status: &str) -> Result<(), AppError> {
    if TransactionStatus::parse(status) == Some(TransactionStatus::Completed) {
        return Err(AppError::Validation(
            "A completed transaction cannot be modified".into(),
        ));
    }
    Ok(())
}

/// Splits net profit by the investor's margin percentage (0-100). The
/// manager amount is the remainder, so the two always add back to net.
pub fn split_profit(net: &BigDecimal, margin_percentage: &BigDecimal) -> (BigDecimal, BigDecimal) {
    let investor = (net * margin_percentage) / BigDecimal::from(100);
    let manager = net - &investor;
    (investor, manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_follows_margin() {
        let (investor, manager) = split_profit(&BigDecimal::from(10_000), &BigDecimal::from(60));
        assert_eq!(investor, BigDecimal::from(6_000));
        assert_eq!(manager, BigDecimal::from(4_000));
    }

    #[test]
    fn split_amounts_sum_to_net() {
        let net = BigDecimal::from(12_345);
        let (investor, manager) = split_profit(&net, &BigDecimal::from(37));
        assert_eq!(&investor + &manager, net);
    }

    #[test]
    fn negative_net_splits_negative() {
        let (investor, manager) = split_profit(&BigDecimal::from(-1_000), &BigDecimal::from(50));
        assert_eq!(investor, BigDecimal::from(-500));
        assert_eq!(manager, BigDecimal::from(-500));
    }

    #[test]
    fn zero_margin_gives_everything_to_manager() {
        let (investor, manager) = split_profit(&BigDecimal::from(5_000), &BigDecimal::from(0));
        assert_eq!(investor, BigDecimal::from(0));
        assert_eq!(manager, BigDecimal::from(5_000));
    }

    #[test]
    fn open_transactions_stay_editable() {
        assert!(ensure_editable("PENDING").is_ok());
        assert!(ensure_editable("CANCELLED").is_ok());
    }

    #[test]
    fn completed_transactions_are_frozen() {
        match ensure_editable("COMPLETED") {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "A completed transaction cannot be modified");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
}
