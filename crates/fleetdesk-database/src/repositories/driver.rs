//! Driver repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fleetdesk_core::error::{AppError, ErrorKind};
use fleetdesk_core::result::AppResult;

/// Repository for driver lookups.
#[derive(Debug, Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    /// Create a new driver repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up the full display name of a driver.
    pub async fn full_name_of(&self, driver_id: Uuid) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT first_name || ' ' || last_name FROM drivers WHERE id = $1",
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up driver name", e))
    }
}
