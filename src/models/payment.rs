use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Cash paid out to an investor. proof_path points at the uploaded payment
// proof under UPLOAD_DIR, when one has been attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: uuid::Uuid,
    pub investor_id: uuid::Uuid,
    pub amount: BigDecimal,
    pub note: Option<String>,
    pub proof_path: Option<String>,
    pub paid_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePayment {
    pub investor_id: uuid::Uuid,
    pub amount: BigDecimal,
    pub note: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn new(data: CreatePayment) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            investor_id: data.investor_id,
            amount: data.amount,
            note: data.note,
            proof_path: None,
            paid_at: data.paid_at.unwrap_or_else(Utc::now),
            created_at: Utc::now(),
        }
    }
}
