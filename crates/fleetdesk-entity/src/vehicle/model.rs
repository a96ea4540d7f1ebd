//! Vehicle entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A vehicle in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
    /// License plate.
    pub plate: String,
    /// Date the next maintenance is scheduled for. A calendar date; the
    /// time of day carries no meaning.
    pub next_maintenance_date: Option<NaiveDate>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
