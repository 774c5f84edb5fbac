use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// An investor funds vehicle units and receives a configured share of the
// profit when a unit sells (margin_percentage, 0-100).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Investor {
    pub id: uuid::Uuid,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub margin_percentage: BigDecimal,
    pub user_id: Option<uuid::Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvestor {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub margin_percentage: BigDecimal,
    pub user_id: Option<uuid::Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvestor {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub margin_percentage: BigDecimal,
    pub user_id: Option<uuid::Uuid>,
}

impl Investor {
    pub fn new(data: CreateInvestor) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: data.name,
            phone: data.phone,
            address: data.address,
            margin_percentage: data.margin_percentage,
            user_id: data.user_id,
            created_at: chrono::Utc::now(),
        }
    }
}
