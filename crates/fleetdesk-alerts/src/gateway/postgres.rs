//! PostgreSQL-backed gateway delegating to the repositories.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use fleetdesk_core::result::AppResult;
use fleetdesk_database::repositories::{
    DocumentRepository, DriverRepository, NotificationRepository, VehicleRepository,
};
use fleetdesk_entity::document::Document;
use fleetdesk_entity::notification::{NewNotification, Notification, RelatedEntityKind};
use fleetdesk_entity::vehicle::Vehicle;

use super::AlertGateway;

/// Gateway implementation over the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgAlertGateway {
    vehicles: Arc<VehicleRepository>,
    drivers: Arc<DriverRepository>,
    documents: Arc<DocumentRepository>,
    notifications: Arc<NotificationRepository>,
}

impl PgAlertGateway {
    /// Create a new gateway over the given repositories.
    pub fn new(
        vehicles: Arc<VehicleRepository>,
        drivers: Arc<DriverRepository>,
        documents: Arc<DocumentRepository>,
        notifications: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            vehicles,
            drivers,
            documents,
            notifications,
        }
    }
}

#[async_trait]
impl AlertGateway for PgAlertGateway {
    async fn vehicles_due_for_maintenance(
        &self,
        on_or_before: NaiveDate,
    ) -> AppResult<Vec<Vehicle>> {
        self.vehicles.find_due_for_maintenance(on_or_before).await
    }

    async fn documents_due_for_expiry(&self, on_or_before: NaiveDate) -> AppResult<Vec<Document>> {
        self.documents.find_due_for_expiry(on_or_before).await
    }

    async fn find_unread_notification(
        &self,
        related_entity_id: Uuid,
        related_entity_kind: RelatedEntityKind,
        message_contains: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Notification>> {
        self.notifications
            .find_unread_equivalent(related_entity_id, related_entity_kind, message_contains, user_id)
            .await
    }

    async fn insert_notification(&self, new: &NewNotification) -> AppResult<Notification> {
        self.notifications.create(new).await
    }

    async fn vehicle_plate(&self, vehicle_id: Uuid) -> AppResult<Option<String>> {
        self.vehicles.plate_of(vehicle_id).await
    }

    async fn driver_full_name(&self, driver_id: Uuid) -> AppResult<Option<String>> {
        self.drivers.full_name_of(driver_id).await
    }
}
