use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::stats_queries::{InvestorTransactionRow, UnitCapitalRow};
use crate::errors::AppError;
use crate::models::{InvestorDashboard, InvestorStats, Payment, RecentTransaction};

const RECENT_LIMIT: usize = 5;

/// Builds the dashboard bundle for one investor: capital, realized profit,
/// cash received, unit counts and a short recent-transaction list.
///
/// Reads only; the individual queries are not wrapped in one snapshot
/// transaction, so a concurrent write between reads can skew the numbers
/// slightly. Fine for a dashboard.
pub async fn fetch(pool: &PgPool, investor_id: Uuid) -> Result<InvestorDashboard, AppError> {
    let investor = db::investor_queries::fetch_one(pool, investor_id)
        .await?
        .ok_or(AppError::NotFound("Investor not found".to_string()))?;

    let capital_rows = db::stats_queries::fetch_unit_capital_rows(pool, investor_id).await?;
    let transaction_rows = db::stats_queries::fetch_investor_transactions(pool, investor_id).await?;
    let payments = db::payment_queries::fetch_by_investor(pool, investor_id).await?;
    // The total is its own count query, independent of the loaded list.
    let total_units_count = db::unit_queries::count_by_investor(pool, investor_id).await?;

    let stats = InvestorStats {
        total_invested: total_invested(&capital_rows),
        total_profit: total_profit(&transaction_rows),
        total_received: total_received(&payments),
        active_units_count: active_units_count(&capital_rows),
        total_units_count,
    };

    Ok(InvestorDashboard {
        investor,
        stats,
        recent_transactions: recent_transactions(&transaction_rows),
    })
}

/// Capital across all units: the override figure when recorded, else the
/// buy price; a unit without any transaction contributes nothing.
pub fn total_invested(rows: &[UnitCapitalRow]) -> BigDecimal {
    rows.iter()
        .filter_map(|r| r.initial_investor_capital.clone().or_else(|| r.buy_price.clone()))
        .fold(BigDecimal::from(0), |acc, capital| acc + capital)
}

/// Realized profit: only strictly positive split amounts are summed. Zero
/// and negative entries are excluded from the sum entirely (not clamped),
/// so a corrective negative adjustment does not reduce the total.
pub fn total_profit(rows: &[InvestorTransactionRow]) -> BigDecimal {
    rows.iter()
        .filter_map(|r| r.investor_profit_amount.as_ref())
        .filter(|amount| **amount > BigDecimal::from(0))
        .fold(BigDecimal::from(0), |acc, amount| acc + amount)
}

/// AVAILABLE units only; SOLD and MAINTENANCE are excluded here but still
/// count toward the total and the capital sum.
pub fn active_units_count(rows: &[UnitCapitalRow]) -> i64 {
    rows.iter().filter(|r| r.status == "AVAILABLE").count() as i64
}

/// Every payout counts, independent of unit or transaction state.
pub fn total_received(payments: &[Payment]) -> BigDecimal {
    payments
        .iter()
        .fold(BigDecimal::from(0), |acc, p| acc + &p.amount)
}

/// At most RECENT_LIMIT transactions in load order.
pub fn recent_transactions(rows: &[InvestorTransactionRow]) -> Vec<RecentTransaction> {
    rows.iter()
        .take(RECENT_LIMIT)
        .map(|r| RecentTransaction {
            id: r.id,
            unit_id: r.unit_id,
            buyer_name: r.buyer_name.clone(),
            buy_price: r.buy_price.clone(),
            sell_price: r.sell_price.clone(),
            status: r.status.clone(),
            investor_profit_amount: r.investor_profit_amount.clone(),
            created_at: r.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn capital_row(
        buy_price: Option<i64>,
        initial_capital: Option<i64>,
        status: &str,
    ) -> UnitCapitalRow {
        UnitCapitalRow {
            status: status.to_string(),
            buy_price: buy_price.map(BigDecimal::from),
            initial_investor_capital: initial_capital.map(BigDecimal::from),
        }
    }

    fn transaction_row(profit: Option<i64>) -> InvestorTransactionRow {
        InvestorTransactionRow {
            id: Uuid::new_v4(),
            unit_id: Uuid::new_v4(),
            buyer_name: "Buyer".to_string(),
            buy_price: BigDecimal::from(100_000),
            sell_price: BigDecimal::from(120_000),
            status: "COMPLETED".to_string(),
            investor_profit_amount: profit.map(BigDecimal::from),
            created_at: Utc::now(),
        }
    }

    fn payment(amount: i64) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            investor_id: Uuid::new_v4(),
            amount: BigDecimal::from(amount),
            note: None,
            proof_path: None,
            paid_at: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn no_units_means_zero_everything() {
        assert_eq!(total_invested(&[]), BigDecimal::from(0));
        assert_eq!(total_profit(&[]), BigDecimal::from(0));
        assert_eq!(total_received(&[]), BigDecimal::from(0));
        assert_eq!(active_units_count(&[]), 0);
        assert!(recent_transactions(&[]).is_empty());
    }

    #[test]
    fn buy_price_is_the_default_capital() {
        let rows = vec![capital_row(Some(100_000), None, "AVAILABLE")];
        assert_eq!(total_invested(&rows), BigDecimal::from(100_000));
    }

    #[test]
    fn capital_override_beats_buy_price() {
        let rows = vec![capital_row(Some(100_000), Some(80_000), "AVAILABLE")];
        assert_eq!(total_invested(&rows), BigDecimal::from(80_000));
    }

    #[test]
    fn unit_without_transaction_contributes_nothing() {
        let rows = vec![
            capital_row(None, None, "AVAILABLE"),
            capital_row(None, None, "MAINTENANCE"),
            capital_row(Some(50_000), None, "SOLD"),
        ];
        assert_eq!(total_invested(&rows), BigDecimal::from(50_000));
    }

    #[test]
    fn sold_and_maintenance_units_still_count_toward_capital() {
        let rows = vec![
            capital_row(Some(30_000), None, "SOLD"),
            capital_row(Some(20_000), None, "MAINTENANCE"),
            capital_row(Some(10_000), None, "AVAILABLE"),
        ];
        assert_eq!(total_invested(&rows), BigDecimal::from(60_000));
    }

    #[test]
    fn active_count_tracks_available_units_only() {
        let rows = vec![
            capital_row(Some(30_000), None, "SOLD"),
            capital_row(Some(20_000), None, "MAINTENANCE"),
            capital_row(Some(10_000), None, "AVAILABLE"),
            capital_row(None, None, "AVAILABLE"),
        ];
        assert_eq!(active_units_count(&rows), 2);
    }

    #[test]
    fn positive_profit_is_summed() {
        let rows = vec![transaction_row(Some(5_000)), transaction_row(Some(2_500))];
        assert_eq!(total_profit(&rows), BigDecimal::from(7_500));
    }

    #[test]
    fn zero_and_negative_profit_are_excluded_not_clamped() {
        // A -3000 adjustment vanishes from the sum; the result is 5000, not
        // 2000 (sum-all) and not what max(amount, 0) over a single combined
        // record would give.
        let rows = vec![
            transaction_row(Some(5_000)),
            transaction_row(Some(0)),
            transaction_row(Some(-3_000)),
            transaction_row(None),
        ];
        assert_eq!(total_profit(&rows), BigDecimal::from(5_000));
    }

    #[test]
    fn payments_sum_exactly() {
        let payments = vec![payment(1_000), payment(2_000), payment(500)];
        assert_eq!(total_received(&payments), BigDecimal::from(3_500));
    }

    #[test]
    fn recent_list_is_capped_at_five() {
        let rows: Vec<_> = (0..8).map(|i| transaction_row(Some(i + 1))).collect();
        let recent = recent_transactions(&rows);
        assert_eq!(recent.len(), 5);
        // Load order preserved: the first five loaded rows, in order.
        for (r, row) in recent.iter().zip(rows.iter()) {
            assert_eq!(r.id, row.id);
        }
    }

    #[test]
    fn fewer_than_five_transactions_all_appear() {
        let rows = vec![transaction_row(Some(1)), transaction_row(None)];
        assert_eq!(recent_transactions(&rows).len(), 2);
    }
}
