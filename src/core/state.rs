//! Application state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::role;
use crate::utils::AppError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Open the database, apply migrations and ensure the standard roles
    /// exist. Seeding happens here, once per process, never per request.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        role::seed_defaults(&db.pool).await?;
        tracing::info!("Standard roles ensured");

        Ok(Self { pool: db.pool })
    }
}
