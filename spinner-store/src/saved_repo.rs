use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spinner_core::repository::{NewSavedDestination, SavedDestination, SavedDestinationRepository};
use spinner_core::CoreResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{map_insert_error, map_sqlx_error};

pub struct PgSavedDestinationRepository {
    pool: PgPool,
}

impl PgSavedDestinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SavedDestinationRow {
    id: Uuid,
    user_id: String,
    destination_id: String,
    destination_name: String,
    country_code: String,
    country_name: String,
    note: Option<String>,
    saved_at: DateTime<Utc>,
}

impl From<SavedDestinationRow> for SavedDestination {
    fn from(row: SavedDestinationRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            destination_id: row.destination_id,
            destination_name: row.destination_name,
            country_code: row.country_code,
            country_name: row.country_name,
            note: row.note,
            saved_at: row.saved_at,
        }
    }
}

#[async_trait]
impl SavedDestinationRepository for PgSavedDestinationRepository {
    async fn save(&self, new: NewSavedDestination) -> CoreResult<SavedDestination> {
        let saved = new.into_saved(Utc::now());

        let row = sqlx::query_as::<_, SavedDestinationRow>(
            r#"
            INSERT INTO saved_destinations (id, user_id, destination_id, destination_name, country_code, country_name, note, saved_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, destination_id, destination_name, country_code, country_name, note, saved_at
            "#,
        )
        .bind(saved.id)
        .bind(&saved.user_id)
        .bind(&saved.destination_id)
        .bind(&saved.destination_name)
        .bind(&saved.country_code)
        .bind(&saved.country_name)
        .bind(&saved.note)
        .bind(saved.saved_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Destination already saved"))?;

        Ok(row.into())
    }

    async fn list(&self, user_id: &str) -> CoreResult<Vec<SavedDestination>> {
        let rows = sqlx::query_as::<_, SavedDestinationRow>(
            r#"
            SELECT id, user_id, destination_id, destination_name, country_code, country_name, note, saved_at
            FROM saved_destinations
            WHERE user_id = $1
            ORDER BY saved_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM saved_destinations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
