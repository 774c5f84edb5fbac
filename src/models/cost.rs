use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// An expense booked against a transaction; reduces its net profit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cost {
    pub id: uuid::Uuid,
    pub transaction_id: uuid::Uuid,
    pub description: String,
    pub amount: BigDecimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCost {
    pub description: String,
    pub amount: BigDecimal,
}

impl Cost {
    pub fn new(transaction_id: uuid::Uuid, data: CreateCost) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            transaction_id,
            description: data.description,
            amount: data.amount,
            created_at: chrono::Utc::now(),
        }
    }
}
