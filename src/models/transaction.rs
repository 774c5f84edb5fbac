use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<TransactionStatus> {
        match s {
            "PENDING" => Some(TransactionStatus::Pending),
            "COMPLETED" => Some(TransactionStatus::Completed),
            "CANCELLED" => Some(TransactionStatus::Cancelled),
            _ => None,
        }
    }
}

// The sale event for a unit. buy_price is the acquisition cost;
// initial_investor_capital, when set, overrides it as the capital figure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: uuid::Uuid,
    pub unit_id: uuid::Uuid,
    pub buyer_name: String,
    pub buy_price: BigDecimal,
    pub sell_price: BigDecimal,
    pub initial_investor_capital: Option<BigDecimal>,
    pub status: String, // Will be converted to/from TransactionStatus
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub unit_id: uuid::Uuid,
    pub buyer_name: String,
    pub buy_price: BigDecimal,
    pub sell_price: BigDecimal,
    pub initial_investor_capital: Option<BigDecimal>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTransaction {
    pub buyer_name: String,
    pub buy_price: BigDecimal,
    pub sell_price: BigDecimal,
    pub initial_investor_capital: Option<BigDecimal>,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(data: CreateTransaction) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            unit_id: data.unit_id,
            buyer_name: data.buyer_name,
            buy_price: data.buy_price,
            sell_price: data.sell_price,
            initial_investor_capital: data.initial_investor_capital,
            status: TransactionStatus::Pending.as_str().to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}
