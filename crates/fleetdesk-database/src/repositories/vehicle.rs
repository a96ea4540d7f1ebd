//! Vehicle repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use fleetdesk_core::error::{AppError, ErrorKind};
use fleetdesk_core::result::AppResult;
use fleetdesk_entity::vehicle::Vehicle;

/// Repository for vehicle read operations.
///
/// The reconciliation job is read-only over vehicles; mutations happen
/// elsewhere in the back office.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    /// Create a new vehicle repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List vehicles whose next maintenance date falls on or before the
    /// given date. Vehicles without a maintenance date are excluded.
    pub async fn find_due_for_maintenance(&self, on_or_before: NaiveDate) -> AppResult<Vec<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles \
             WHERE next_maintenance_date IS NOT NULL AND next_maintenance_date <= $1 \
             ORDER BY next_maintenance_date",
        )
        .bind(on_or_before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list due vehicles", e))
    }

    /// Look up the license plate of a vehicle.
    pub async fn plate_of(&self, vehicle_id: Uuid) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT plate FROM vehicles WHERE id = $1")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up plate", e))
    }
}
