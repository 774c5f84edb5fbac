use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// The realized profit split, created once its transaction completes.
// investor/manager share percentages sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfitSharing {
    pub id: uuid::Uuid,
    pub transaction_id: uuid::Uuid,
    pub investor_share_percentage: BigDecimal,
    pub manager_share_percentage: BigDecimal,
    pub investor_profit_amount: BigDecimal,
    pub manager_profit_amount: BigDecimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ProfitSharing {
    pub fn new(
        transaction_id: uuid::Uuid,
        investor_share_percentage: BigDecimal,
        manager_share_percentage: BigDecimal,
        investor_profit_amount: BigDecimal,
        manager_profit_amount: BigDecimal,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            transaction_id,
            investor_share_percentage,
            manager_share_percentage,
            investor_profit_amount,
            manager_profit_amount,
            created_at: chrono::Utc::now(),
        }
    }
}
