//! Document repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use fleetdesk_core::error::{AppError, ErrorKind};
use fleetdesk_core::result::AppResult;
use fleetdesk_entity::document::Document;

/// Repository for document read operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List documents whose expiry date falls on or before the given date.
    /// Documents without an expiry date are excluded.
    pub async fn find_due_for_expiry(&self, on_or_before: NaiveDate) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents \
             WHERE expiry_date IS NOT NULL AND expiry_date <= $1 \
             ORDER BY expiry_date",
        )
        .bind(on_or_before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list due documents", e))
    }
}
