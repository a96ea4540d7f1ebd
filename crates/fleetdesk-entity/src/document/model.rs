//! Document entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An administrative document (insurance, registration, permit, ...)
/// attached to a vehicle or a driver for display context.
///
/// At most one of `vehicle_id` / `driver_id` is meaningfully set. The
/// linkage is display-only; no referential integrity is assumed by the
/// reconciliation job.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Document title.
    pub title: String,
    /// Free-form document type label.
    pub document_type: String,
    /// Date the document expires. A calendar date; the time of day
    /// carries no meaning.
    pub expiry_date: Option<NaiveDate>,
    /// Vehicle this document relates to, if any.
    pub vehicle_id: Option<Uuid>,
    /// Driver this document relates to, if any.
    pub driver_id: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
