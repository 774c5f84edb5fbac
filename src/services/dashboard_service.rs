use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{AdminDashboard, InvestorDashboard, StatusCount};
use crate::services::{activity_log_service, investor_stats};

const RECENT_ACTIVITY_LIMIT: i64 = 10;

pub async fn admin(pool: &PgPool) -> Result<AdminDashboard, AppError> {
    let units_by_status = db::stats_queries::count_units_by_status(pool).await?;
    let transactions_by_status = db::stats_queries::count_transactions_by_status(pool).await?;
    let total_invested = db::stats_queries::total_capital(pool).await?;
    let (total_investor_profit, total_manager_profit) =
        db::stats_queries::total_profit_split(pool).await?;
    let recent_activity = activity_log_service::fetch_recent(pool, RECENT_ACTIVITY_LIMIT).await?;

    Ok(AdminDashboard {
        units_by_status: units_by_status
            .into_iter()
            .map(|r| StatusCount { status: r.status, count: r.count })
            .collect(),
        transactions_by_status: transactions_by_status
            .into_iter()
            .map(|r| StatusCount { status: r.status, count: r.count })
            .collect(),
        total_invested,
        total_investor_profit,
        total_manager_profit,
        recent_activity,
    })
}

/// The caller's own dashboard. `Ok(None)` means the login has no linked
/// investor row; the route renders that as a "not linked" body, not an
/// error.
pub async fn for_user(pool: &PgPool, user_id: Uuid) -> Result<Option<InvestorDashboard>, AppError> {
    let investor = match db::investor_queries::find_by_user(pool, user_id).await? {
        Some(investor) => investor,
        None => return Ok(None),
    };
    let dashboard = investor_stats::fetch(pool, investor.id).await?;
    Ok(Some(dashboard))
}
