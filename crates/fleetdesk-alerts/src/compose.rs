//! Notification composition for due items.
//!
//! Pure constructors; persistence happens in the job driver. The message
//! text doubles as the duplicate-suppression key material, so the display
//! substring (plate or title) must appear verbatim in it.

use fleetdesk_entity::notification::{
    NewNotification, NotificationKind, NotificationStatus, RelatedEntityKind,
};

use crate::scanner::{DueDocument, DueVehicle};

/// Build the maintenance-due notification for a vehicle.
pub fn maintenance_alert(due: &DueVehicle) -> NewNotification {
    NewNotification {
        user_id: due.user_id,
        title: format!("Maintenance due: {} {}", due.make, due.model),
        message: format!(
            "Vehicle {} is due for maintenance on {}.",
            due.plate, due.due_date
        ),
        kind: NotificationKind::Warning,
        status: NotificationStatus::Unread,
        related_entity_id: Some(due.id),
        related_entity_kind: Some(RelatedEntityKind::Maintenance),
    }
}

/// Build the expiry notification for a document.
pub fn expiry_alert(due: &DueDocument) -> NewNotification {
    NewNotification {
        user_id: due.user_id,
        title: format!("Document expiring: {}", due.title),
        message: format!(
            "Document \"{}\" ({}) for {} expires on {}.",
            due.title, due.document_type, due.entity_name, due.expiry_date
        ),
        kind: NotificationKind::Warning,
        status: NotificationStatus::Unread,
        related_entity_id: Some(due.id),
        related_entity_kind: Some(RelatedEntityKind::Document),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn due_vehicle() -> DueVehicle {
        DueVehicle {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            make: "Renault".to_string(),
            model: "Kangoo".to_string(),
            plate: "AB-123-CD".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, 2).expect("valid date"),
        }
    }

    fn due_document(entity_name: &str) -> DueDocument {
        DueDocument {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Assurance".to_string(),
            document_type: "insurance".to_string(),
            entity_name: entity_name.to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 4, 9).expect("valid date"),
        }
    }

    #[test]
    fn test_maintenance_alert_shape() {
        let due = due_vehicle();
        let alert = maintenance_alert(&due);

        assert_eq!(alert.user_id, due.user_id);
        assert_eq!(alert.kind, NotificationKind::Warning);
        assert_eq!(alert.status, NotificationStatus::Unread);
        assert_eq!(alert.related_entity_id, Some(due.id));
        assert_eq!(
            alert.related_entity_kind,
            Some(RelatedEntityKind::Maintenance)
        );
        assert!(alert.title.contains("Renault"));
        assert!(alert.title.contains("Kangoo"));
        assert!(alert.message.contains("AB-123-CD"));
        assert!(alert.message.contains("2026-04-02"));
    }

    #[test]
    fn test_expiry_alert_shape() {
        let due = due_document("AB-123-CD");
        let alert = expiry_alert(&due);

        assert_eq!(alert.related_entity_id, Some(due.id));
        assert_eq!(alert.related_entity_kind, Some(RelatedEntityKind::Document));
        assert!(alert.title.contains("Assurance"));
        assert!(alert.message.contains("Assurance"));
        assert!(alert.message.contains("insurance"));
        assert!(alert.message.contains("AB-123-CD"));
        assert!(alert.message.contains("2026-04-09"));
    }

    #[test]
    fn test_expiry_alert_with_unresolved_context() {
        let alert = expiry_alert(&due_document(""));

        assert!(alert.message.contains("Assurance"));
        assert!(alert.message.contains("2026-04-09"));
    }
}
