//! Notification kind, status, and related-entity enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity/category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational message.
    Info,
    /// Something needs attention soon.
    Warning,
    /// Something went wrong.
    Error,
    /// A positive confirmation.
    Success,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Not yet seen by the user.
    Unread,
    /// Seen by the user.
    Read,
    /// Put away by the user; hidden from the default listing.
    Archived,
}

impl NotificationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of record a notification points back to.
///
/// A weak back-reference used for display linkage only; the pointed-to
/// record may have been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "related_entity_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RelatedEntityKind {
    /// A vehicle maintenance deadline.
    Maintenance,
    /// An expiring document.
    Document,
}

impl RelatedEntityKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for RelatedEntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        assert_eq!(NotificationKind::Warning.as_str(), "warning");
        assert_eq!(NotificationStatus::Unread.to_string(), "unread");
        assert_eq!(RelatedEntityKind::Maintenance.as_str(), "maintenance");
        assert_eq!(RelatedEntityKind::Document.to_string(), "document");
    }
}
