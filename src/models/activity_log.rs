use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLog {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<uuid::Uuid>,
    pub detail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ActivityLog {
    pub fn new(
        user_id: Option<uuid::Uuid>,
        action: &str,
        entity: &str,
        entity_id: Option<uuid::Uuid>,
        detail: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            action: action.to_string(),
            entity: entity.to_string(),
            entity_id,
            detail,
            created_at: chrono::Utc::now(),
        }
    }
}
