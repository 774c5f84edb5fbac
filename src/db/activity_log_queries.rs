use sqlx::PgPool;

use crate::models::ActivityLog;

pub async fn insert(pool: &PgPool, input: ActivityLog) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO activity_logs (id, user_id, action, entity, entity_id, detail, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(input.id)
    .bind(input.user_id)
    .bind(input.action)
    .bind(input.entity)
    .bind(input.entity_id)
    .bind(input.detail)
    .bind(input.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityLog>, sqlx::Error> {
    sqlx::query_as::<_, ActivityLog>(
        "SELECT id, user_id, action, entity, entity_id, detail, created_at
         FROM activity_logs
         ORDER BY created_at DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
