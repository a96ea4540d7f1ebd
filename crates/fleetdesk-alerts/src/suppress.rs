//! Duplicate suppression for due-item notifications.
//!
//! An unread notification counts as equivalent to a due item when its
//! related-entity linkage matches and its message contains the item's
//! display substring (the vehicle plate, or the document title). This is
//! a heuristic, not a strong key: colliding display substrings suppress
//! wrongly, and a message wording change re-notifies. Notifications the
//! user has read or archived never suppress, so a still-due item is
//! re-raised on the next run.

use fleetdesk_core::result::AppResult;
use fleetdesk_entity::notification::RelatedEntityKind;

use crate::gateway::AlertGateway;
use crate::scanner::{DueDocument, DueVehicle};

/// Whether a maintenance notification should be created for the vehicle.
pub async fn should_create_for_vehicle(
    gateway: &dyn AlertGateway,
    due: &DueVehicle,
) -> AppResult<bool> {
    let existing = gateway
        .find_unread_notification(due.id, RelatedEntityKind::Maintenance, &due.plate, due.user_id)
        .await?;
    Ok(existing.is_none())
}

/// Whether an expiry notification should be created for the document.
pub async fn should_create_for_document(
    gateway: &dyn AlertGateway,
    due: &DueDocument,
) -> AppResult<bool> {
    let existing = gateway
        .find_unread_notification(due.id, RelatedEntityKind::Document, &due.title, due.user_id)
        .await?;
    Ok(existing.is_none())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use fleetdesk_entity::notification::NotificationStatus;

    use super::*;
    use crate::compose;
    use crate::gateway::MemoryAlertGateway;
    use crate::scanner::{due_vehicles, horizon_end};
    use crate::testutil::{today, vehicle};

    async fn seeded_due_vehicle(gateway: &MemoryAlertGateway) -> DueVehicle {
        let v = vehicle("AB-123-CD", Some(today() + Duration::days(3)));
        gateway.add_vehicle(v.clone()).await;
        due_vehicles(vec![v], horizon_end(today()))
            .into_iter()
            .next()
            .expect("vehicle is due")
    }

    #[tokio::test]
    async fn test_creates_when_no_equivalent_exists() {
        let gateway = MemoryAlertGateway::new();
        let due = seeded_due_vehicle(&gateway).await;

        assert!(should_create_for_vehicle(&gateway, &due).await.expect("query"));
    }

    #[tokio::test]
    async fn test_suppresses_matching_unread() {
        let gateway = MemoryAlertGateway::new();
        let due = seeded_due_vehicle(&gateway).await;

        gateway
            .insert_notification(&compose::maintenance_alert(&due))
            .await
            .expect("insert");

        assert!(!should_create_for_vehicle(&gateway, &due).await.expect("query"));
    }

    #[tokio::test]
    async fn test_message_mismatch_is_not_suppressed() {
        let gateway = MemoryAlertGateway::new();
        let due = seeded_due_vehicle(&gateway).await;

        let mut reworded = compose::maintenance_alert(&due);
        reworded.message = "Maintenance scheduled for your vehicle.".to_string();
        gateway.insert_notification(&reworded).await.expect("insert");

        // The plate no longer appears in the stored message, so the
        // heuristic re-notifies.
        assert!(should_create_for_vehicle(&gateway, &due).await.expect("query"));
    }

    #[tokio::test]
    async fn test_read_notification_does_not_suppress() {
        let gateway = MemoryAlertGateway::new();
        let due = seeded_due_vehicle(&gateway).await;

        let mut stored = gateway
            .insert_notification(&compose::maintenance_alert(&due))
            .await
            .expect("insert");
        stored.status = NotificationStatus::Read;

        let fresh = MemoryAlertGateway::new();
        fresh.add_notification(stored).await;

        assert!(should_create_for_vehicle(&fresh, &due).await.expect("query"));
    }

    #[tokio::test]
    async fn test_other_users_alerts_do_not_suppress() {
        let gateway = MemoryAlertGateway::new();
        let due = seeded_due_vehicle(&gateway).await;

        let mut foreign = compose::maintenance_alert(&due);
        foreign.user_id = uuid::Uuid::new_v4();
        gateway.insert_notification(&foreign).await.expect("insert");

        assert!(should_create_for_vehicle(&gateway, &due).await.expect("query"));
    }
}
