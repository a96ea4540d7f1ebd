//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use fleetdesk_core::error::{AppError, ErrorKind};

/// Apply every pending migration from the workspace `migrations/` tree.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Database schema is up to date");
    Ok(())
}
