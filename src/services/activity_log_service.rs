use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::ActivityLog;

// Best-effort write: a failed audit row is logged, never surfaced to the
// request that triggered it.
pub async fn record(
    pool: &PgPool,
    user_id: Option<Uuid>,
    action: &str,
    entity: &str,
    entity_id: Option<Uuid>,
    detail: Option<String>,
) {
    let entry = ActivityLog::new(user_id, action, entity, entity_id, detail);
    if let Err(e) = db::activity_log_queries::insert(pool, entry).await {
        error!("Failed to record activity {} {}: {}", action, entity, e);
    }
}

pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityLog>, AppError> {
    let entries = db::activity_log_queries::fetch_recent(pool, limit).await?;
    Ok(entries)
}
