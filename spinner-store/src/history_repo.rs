use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spinner_core::repository::{SpinHistoryEntry, SpinHistoryRepository};
use spinner_core::CoreResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{map_insert_error, map_sqlx_error};

pub struct PgSpinHistoryRepository {
    pool: PgPool,
}

impl PgSpinHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SpinHistoryRow {
    id: Uuid,
    user_id: String,
    session_id: Uuid,
    target: String,
    pick_key: String,
    pick_name: String,
    was_reset: bool,
    spun_at: DateTime<Utc>,
}

impl From<SpinHistoryRow> for SpinHistoryEntry {
    fn from(row: SpinHistoryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            session_id: row.session_id,
            target: row.target,
            pick_key: row.pick_key,
            pick_name: row.pick_name,
            was_reset: row.was_reset,
            spun_at: row.spun_at,
        }
    }
}

#[async_trait]
impl SpinHistoryRepository for PgSpinHistoryRepository {
    async fn record(&self, entry: SpinHistoryEntry) -> CoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO spin_history (id, user_id, session_id, target, pick_key, pick_name, was_reset, spun_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(entry.session_id)
        .bind(&entry.target)
        .bind(&entry.pick_key)
        .bind(&entry.pick_name)
        .bind(entry.was_reset)
        .bind(entry.spun_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Spin already recorded"))?;

        Ok(())
    }

    async fn list(&self, user_id: &str, limit: u32) -> CoreResult<Vec<SpinHistoryEntry>> {
        let rows = sqlx::query_as::<_, SpinHistoryRow>(
            r#"
            SELECT id, user_id, session_id, target, pick_key, pick_name, was_reset, spun_at
            FROM spin_history
            WHERE user_id = $1
            ORDER BY spun_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
