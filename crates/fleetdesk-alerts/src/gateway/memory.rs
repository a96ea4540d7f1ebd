//! In-memory gateway using a Tokio mutex.
//!
//! Backs the reconciliation tests and single-process experiments.
//! Suitable for single-node use only; nothing is persisted.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use fleetdesk_core::error::AppError;
use fleetdesk_core::result::AppResult;
use fleetdesk_entity::document::Document;
use fleetdesk_entity::driver::Driver;
use fleetdesk_entity::notification::{NewNotification, Notification, RelatedEntityKind};
use fleetdesk_entity::vehicle::Vehicle;

use super::AlertGateway;

/// Internal state for the in-memory gateway.
#[derive(Debug, Default)]
struct InnerState {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    documents: Vec<Document>,
    notifications: Vec<Notification>,
    /// When set, vehicle listing fails with a database error.
    fail_vehicle_fetch: bool,
    /// When set, document listing fails with a database error.
    fail_document_fetch: bool,
    /// Related-entity ids whose inserts fail with a database error.
    fail_insert_for: HashSet<Uuid>,
}

/// In-memory gateway implementation.
///
/// Failure injection mirrors the fault surface of a remote store so the
/// job's partial-failure behavior can be exercised without one.
#[derive(Debug, Clone, Default)]
pub struct MemoryAlertGateway {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryAlertGateway {
    /// Creates an empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vehicle record.
    pub async fn add_vehicle(&self, vehicle: Vehicle) {
        self.state.lock().await.vehicles.push(vehicle);
    }

    /// Adds a driver record.
    pub async fn add_driver(&self, driver: Driver) {
        self.state.lock().await.drivers.push(driver);
    }

    /// Adds a document record.
    pub async fn add_document(&self, document: Document) {
        self.state.lock().await.documents.push(document);
    }

    /// Seeds an existing notification.
    pub async fn add_notification(&self, notification: Notification) {
        self.state.lock().await.notifications.push(notification);
    }

    /// Makes the next vehicle listings fail.
    pub async fn fail_vehicle_fetch(&self) {
        self.state.lock().await.fail_vehicle_fetch = true;
    }

    /// Makes the next document listings fail.
    pub async fn fail_document_fetch(&self) {
        self.state.lock().await.fail_document_fetch = true;
    }

    /// Makes inserts for the given related-entity id fail.
    pub async fn fail_insert_for(&self, related_entity_id: Uuid) {
        self.state.lock().await.fail_insert_for.insert(related_entity_id);
    }

    /// Returns a snapshot of all stored notifications.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.lock().await.notifications.clone()
    }
}

#[async_trait]
impl AlertGateway for MemoryAlertGateway {
    async fn vehicles_due_for_maintenance(
        &self,
        on_or_before: NaiveDate,
    ) -> AppResult<Vec<Vehicle>> {
        let state = self.state.lock().await;
        if state.fail_vehicle_fetch {
            return Err(AppError::database("vehicle listing unavailable"));
        }
        Ok(state
            .vehicles
            .iter()
            .filter(|v| {
                v.next_maintenance_date
                    .is_some_and(|date| date <= on_or_before)
            })
            .cloned()
            .collect())
    }

    async fn documents_due_for_expiry(&self, on_or_before: NaiveDate) -> AppResult<Vec<Document>> {
        let state = self.state.lock().await;
        if state.fail_document_fetch {
            return Err(AppError::database("document listing unavailable"));
        }
        Ok(state
            .documents
            .iter()
            .filter(|d| d.expiry_date.is_some_and(|date| date <= on_or_before))
            .cloned()
            .collect())
    }

    async fn find_unread_notification(
        &self,
        related_entity_id: Uuid,
        related_entity_kind: RelatedEntityKind,
        message_contains: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Notification>> {
        let state = self.state.lock().await;
        Ok(state
            .notifications
            .iter()
            .find(|n| {
                n.is_unread()
                    && n.user_id == user_id
                    && n.related_entity_id == Some(related_entity_id)
                    && n.related_entity_kind == Some(related_entity_kind)
                    && n.message.contains(message_contains)
            })
            .cloned())
    }

    async fn insert_notification(&self, new: &NewNotification) -> AppResult<Notification> {
        let mut state = self.state.lock().await;
        if let Some(related_id) = new.related_entity_id {
            if state.fail_insert_for.contains(&related_id) {
                return Err(AppError::database("notification insert rejected"));
            }
        }
        let stored = Notification {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            title: new.title.clone(),
            message: new.message.clone(),
            kind: new.kind,
            status: new.status,
            related_entity_id: new.related_entity_id,
            related_entity_kind: new.related_entity_kind,
            created_at: Utc::now(),
        };
        state.notifications.push(stored.clone());
        Ok(stored)
    }

    async fn vehicle_plate(&self, vehicle_id: Uuid) -> AppResult<Option<String>> {
        let state = self.state.lock().await;
        Ok(state
            .vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .map(|v| v.plate.clone()))
    }

    async fn driver_full_name(&self, driver_id: Uuid) -> AppResult<Option<String>> {
        let state = self.state.lock().await;
        Ok(state
            .drivers
            .iter()
            .find(|d| d.id == driver_id)
            .map(Driver::full_name))
    }
}
