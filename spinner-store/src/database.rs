use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations").run(&self.pool).await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}

/// Maps driver errors on writes that can collide, turning unique-constraint
/// violations into `Conflict`.
pub(crate) fn map_insert_error(err: sqlx::Error, conflict_message: &str) -> spinner_core::CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return spinner_core::CoreError::Conflict(conflict_message.to_string());
        }
    }
    map_sqlx_error(err)
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> spinner_core::CoreError {
    tracing::error!("Database error: {}", err);
    spinner_core::CoreError::Storage(err.to_string())
}
