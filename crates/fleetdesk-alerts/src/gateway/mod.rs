//! Data access gateway consumed by the reconciliation job.
//!
//! The job never talks to storage directly; everything it reads or writes
//! goes through [`AlertGateway`]. The production implementation delegates
//! to the PostgreSQL repositories; the in-memory implementation backs
//! tests and single-process experiments.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use fleetdesk_core::result::AppResult;
use fleetdesk_entity::document::Document;
use fleetdesk_entity::notification::{NewNotification, Notification, RelatedEntityKind};
use fleetdesk_entity::vehicle::Vehicle;

pub use memory::MemoryAlertGateway;
pub use postgres::PgAlertGateway;

/// Read/insert operations the reconciliation job needs.
///
/// Listings are pre-filtered to the due window by the implementation;
/// the scanner re-applies the same predicate so job semantics do not
/// depend on where the filtering happens.
#[async_trait]
pub trait AlertGateway: Send + Sync + std::fmt::Debug {
    /// List vehicles with a maintenance date on or before the given date.
    async fn vehicles_due_for_maintenance(
        &self,
        on_or_before: NaiveDate,
    ) -> AppResult<Vec<Vehicle>>;

    /// List documents with an expiry date on or before the given date.
    async fn documents_due_for_expiry(&self, on_or_before: NaiveDate) -> AppResult<Vec<Document>>;

    /// Find an unread notification for the same related record whose
    /// message contains the given substring.
    async fn find_unread_notification(
        &self,
        related_entity_id: Uuid,
        related_entity_kind: RelatedEntityKind,
        message_contains: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Notification>>;

    /// Persist a new notification.
    async fn insert_notification(&self, new: &NewNotification) -> AppResult<Notification>;

    /// Look up a vehicle's license plate for display context.
    async fn vehicle_plate(&self, vehicle_id: Uuid) -> AppResult<Option<String>>;

    /// Look up a driver's full name for display context.
    async fn driver_full_name(&self, driver_id: Uuid) -> AppResult<Option<String>>;
}
