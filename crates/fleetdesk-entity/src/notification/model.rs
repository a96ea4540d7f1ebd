//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::{NotificationKind, NotificationStatus, RelatedEntityKind};

/// A notification delivered to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Severity/category.
    pub kind: NotificationKind,
    /// Read-state.
    pub status: NotificationStatus,
    /// Record this notification points back to, if any.
    pub related_entity_id: Option<Uuid>,
    /// Kind of the record this notification points back to, if any.
    pub related_entity_kind: Option<RelatedEntityKind>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check whether the notification is still unread.
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

/// A notification about to be persisted. The identifier and creation
/// timestamp are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Severity/category.
    pub kind: NotificationKind,
    /// Initial read-state.
    pub status: NotificationStatus,
    /// Record this notification points back to, if any.
    pub related_entity_id: Option<Uuid>,
    /// Kind of the record this notification points back to, if any.
    pub related_entity_kind: Option<RelatedEntityKind>,
}
