//! Driver entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A driver attached to the fleet. Read-only lookup target for document
/// display context.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Driver {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
