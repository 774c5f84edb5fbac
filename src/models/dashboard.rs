use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::models::{ActivityLog, Investor};

// Aggregate figures for one investor's dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct InvestorStats {
    pub total_invested: BigDecimal,
    pub total_profit: BigDecimal,
    pub total_received: BigDecimal,
    pub active_units_count: i64,
    pub total_units_count: i64,
}

// A transaction row as shown in the dashboard's recent list, carrying the
// realized investor profit when the split record exists.
#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub id: uuid::Uuid,
    pub unit_id: uuid::Uuid,
    pub buyer_name: String,
    pub buy_price: BigDecimal,
    pub sell_price: BigDecimal,
    pub status: String,
    pub investor_profit_amount: Option<BigDecimal>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct InvestorDashboard {
    pub investor: Investor,
    pub stats: InvestorStats,
    pub recent_transactions: Vec<RecentTransaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub units_by_status: Vec<StatusCount>,
    pub transactions_by_status: Vec<StatusCount>,
    pub total_invested: BigDecimal,
    pub total_investor_profit: BigDecimal,
    pub total_manager_profit: BigDecimal,
    pub recent_activity: Vec<ActivityLog>,
}
