//! The reconciliation job driver.
//!
//! One run scans for due vehicles and documents, suppresses items that
//! already have an equivalent unread notification, and persists the
//! rest. The job is stateless and re-entrant: every run is a full
//! rescan, and idempotency across runs comes only from the suppressor's
//! heuristic. Recoverable failures are collected into the summary at the
//! narrowest scope (per phase or per item) and never escape `run`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use fleetdesk_entity::document::Document;

use crate::gateway::AlertGateway;
use crate::{compose, scanner, suppress};

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Maintenance notifications created.
    pub vehicles_notified: u64,
    /// Document-expiry notifications created.
    pub documents_notified: u64,
    /// Diagnostics collected from phase and per-item failures.
    pub errors: Vec<String>,
    /// Whether the run stopped early because the wall-clock budget ran out.
    pub aborted: bool,
}

impl RunSummary {
    /// One-line human-readable summary for the HTTP response and logs.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Alert check complete: {} maintenance alert(s) and {} document alert(s) created",
            self.vehicles_notified, self.documents_notified
        );
        if !self.errors.is_empty() {
            message.push_str(&format!(", {} error(s) collected", self.errors.len()));
        }
        if self.aborted {
            message.push_str(" (run budget exceeded)");
        }
        message
    }
}

/// Orchestrates one full reconciliation pass over the gateway.
#[derive(Debug)]
pub struct AlertReconciler {
    /// Data access gateway.
    gateway: Arc<dyn AlertGateway>,
    /// Wall-clock budget for one run. Items not reached within the
    /// budget are skipped and the summary reports the early stop.
    run_budget: Duration,
}

impl AlertReconciler {
    /// Create a new reconciler over the given gateway.
    pub fn new(gateway: Arc<dyn AlertGateway>, run_budget: Duration) -> Self {
        Self {
            gateway,
            run_budget,
        }
    }

    /// Run one pass with the reference date set to the current day.
    pub async fn run_now(&self) -> RunSummary {
        self.run(Utc::now().date_naive()).await
    }

    /// Run one pass: vehicles first, then documents. A fetch failure
    /// skips only its own phase; a single item's failure never aborts
    /// the rest.
    pub async fn run(&self, today: NaiveDate) -> RunSummary {
        let deadline = Instant::now() + self.run_budget;
        let on_or_before = scanner::horizon_end(today);
        let mut summary = RunSummary::default();

        tracing::info!(%today, %on_or_before, "Starting alert reconciliation run");

        self.run_vehicle_phase(on_or_before, deadline, &mut summary)
            .await;
        self.run_document_phase(on_or_before, deadline, &mut summary)
            .await;

        tracing::info!(
            vehicles = summary.vehicles_notified,
            documents = summary.documents_notified,
            errors = summary.errors.len(),
            aborted = summary.aborted,
            "Alert reconciliation run complete"
        );

        summary
    }

    async fn run_vehicle_phase(
        &self,
        on_or_before: NaiveDate,
        deadline: Instant,
        summary: &mut RunSummary,
    ) {
        let vehicles = match self.gateway.vehicles_due_for_maintenance(on_or_before).await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                tracing::warn!(error = %e, "Fetching due vehicles failed, skipping vehicle phase");
                summary.errors.push(format!("fetching due vehicles failed: {e}"));
                return;
            }
        };

        for due in scanner::due_vehicles(vehicles, on_or_before) {
            if Self::past_deadline(deadline, summary) {
                return;
            }

            match suppress::should_create_for_vehicle(self.gateway.as_ref(), &due).await {
                Ok(false) => {
                    tracing::debug!(vehicle = %due.id, plate = %due.plate, "Maintenance alert already pending");
                }
                Ok(true) => {
                    let alert = compose::maintenance_alert(&due);
                    match self.gateway.insert_notification(&alert).await {
                        Ok(_) => summary.vehicles_notified += 1,
                        Err(e) => {
                            tracing::warn!(vehicle = %due.id, error = %e, "Maintenance alert insert failed");
                            summary
                                .errors
                                .push(format!("vehicle {}: insert failed: {e}", due.plate));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(vehicle = %due.id, error = %e, "Maintenance duplicate check failed");
                    summary
                        .errors
                        .push(format!("vehicle {}: duplicate check failed: {e}", due.plate));
                }
            }
        }
    }

    async fn run_document_phase(
        &self,
        on_or_before: NaiveDate,
        deadline: Instant,
        summary: &mut RunSummary,
    ) {
        let documents = match self.gateway.documents_due_for_expiry(on_or_before).await {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(error = %e, "Fetching due documents failed, skipping document phase");
                summary.errors.push(format!("fetching due documents failed: {e}"));
                return;
            }
        };

        for document in scanner::due_documents(documents, on_or_before) {
            if Self::past_deadline(deadline, summary) {
                return;
            }

            let entity_name = self.resolve_entity_name(&document).await;
            let Some(due) = scanner::DueDocument::from_document(&document, entity_name) else {
                continue;
            };

            match suppress::should_create_for_document(self.gateway.as_ref(), &due).await {
                Ok(false) => {
                    tracing::debug!(document = %due.id, title = %due.title, "Expiry alert already pending");
                }
                Ok(true) => {
                    let alert = compose::expiry_alert(&due);
                    match self.gateway.insert_notification(&alert).await {
                        Ok(_) => summary.documents_notified += 1,
                        Err(e) => {
                            tracing::warn!(document = %due.id, error = %e, "Expiry alert insert failed");
                            summary
                                .errors
                                .push(format!("document {}: insert failed: {e}", due.title));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(document = %due.id, error = %e, "Expiry duplicate check failed");
                    summary
                        .errors
                        .push(format!("document {}: duplicate check failed: {e}", due.title));
                }
            }
        }
    }

    /// Resolve the display context for a document: the linked vehicle's
    /// plate, else the linked driver's full name, else empty. Lookup
    /// failures degrade to the next option rather than failing the item.
    async fn resolve_entity_name(&self, document: &Document) -> String {
        if let Some(vehicle_id) = document.vehicle_id {
            match self.gateway.vehicle_plate(vehicle_id).await {
                Ok(Some(plate)) => return plate,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(document = %document.id, error = %e, "Vehicle plate lookup failed");
                }
            }
        }

        if let Some(driver_id) = document.driver_id {
            match self.gateway.driver_full_name(driver_id).await {
                Ok(Some(name)) => return name,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(document = %document.id, error = %e, "Driver name lookup failed");
                }
            }
        }

        String::new()
    }

    /// Whether the run budget is spent. Records the early stop in the
    /// summary the first time it trips.
    fn past_deadline(deadline: Instant, summary: &mut RunSummary) -> bool {
        if Instant::now() < deadline {
            return false;
        }
        if !summary.aborted {
            summary.aborted = true;
            summary
                .errors
                .push("run budget exceeded, remaining items skipped".to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration as ChronoDuration;
    use std::sync::Arc;
    use std::time::Duration;

    use fleetdesk_entity::notification::{NotificationStatus, RelatedEntityKind};

    use super::*;
    use crate::gateway::MemoryAlertGateway;
    use crate::testutil::{
        document, document_for_driver, document_for_vehicle, driver, today, vehicle,
    };

    fn reconciler(gateway: &Arc<MemoryAlertGateway>) -> AlertReconciler {
        AlertReconciler::new(gateway.clone(), Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_due_vehicle_produces_maintenance_alert() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        let v = vehicle("AB-123-CD", Some(today() + ChronoDuration::days(3)));
        let vehicle_id = v.id;
        gateway.add_vehicle(v).await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.vehicles_notified, 1);
        assert_eq!(summary.documents_notified, 0);
        assert!(summary.errors.is_empty());

        let stored = gateway.notifications().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].related_entity_id, Some(vehicle_id));
        assert_eq!(
            stored[0].related_entity_kind,
            Some(RelatedEntityKind::Maintenance)
        );
        assert_eq!(stored[0].status, NotificationStatus::Unread);
        assert!(stored[0].message.contains("AB-123-CD"));
        assert!(stored[0]
            .message
            .contains(&(today() + ChronoDuration::days(3)).to_string()));
    }

    #[tokio::test]
    async fn test_document_beyond_horizon_is_ignored() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        gateway
            .add_document(document("Assurance", Some(today() + ChronoDuration::days(10))))
            .await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.documents_notified, 0);
        assert!(gateway.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_document_alert_resolves_vehicle_plate() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        let v = vehicle("AB-123-CD", None);
        let vehicle_id = v.id;
        gateway.add_vehicle(v).await;
        gateway
            .add_document(document_for_vehicle(
                "Assurance",
                Some(today() + ChronoDuration::days(2)),
                vehicle_id,
            ))
            .await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.documents_notified, 1);
        let stored = gateway.notifications().await;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].message.contains("Assurance"));
        assert!(stored[0].message.contains("AB-123-CD"));
    }

    #[tokio::test]
    async fn test_document_alert_falls_back_to_driver_name() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        let d = driver("Marie", "Durand");
        let driver_id = d.id;
        gateway.add_driver(d).await;
        gateway
            .add_document(document_for_driver(
                "Permis",
                Some(today() + ChronoDuration::days(1)),
                driver_id,
            ))
            .await;

        reconciler(&gateway).run(today()).await;

        let stored = gateway.notifications().await;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].message.contains("Marie Durand"));
    }

    #[tokio::test]
    async fn test_unresolvable_context_degrades_to_empty() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        gateway
            .add_document(document_for_vehicle(
                "Assurance",
                Some(today() + ChronoDuration::days(2)),
                uuid::Uuid::new_v4(),
            ))
            .await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.documents_notified, 1);
        assert!(summary.errors.is_empty());
    }

    #[tokio::test]
    async fn test_second_run_is_suppressed() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        gateway
            .add_vehicle(vehicle("AB-123-CD", Some(today() + ChronoDuration::days(3))))
            .await;

        let job = reconciler(&gateway);
        let first = job.run(today()).await;
        let second = job.run(today()).await;

        assert_eq!(first.vehicles_notified, 1);
        assert_eq!(second.vehicles_notified, 0);
        assert!(second.errors.is_empty());
        assert_eq!(gateway.notifications().await.len(), 1);
    }

    #[tokio::test]
    async fn test_item_failure_does_not_abort_batch() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        let failing = vehicle("AB-123-CD", Some(today() + ChronoDuration::days(1)));
        let failing_id = failing.id;
        gateway.add_vehicle(failing).await;
        gateway
            .add_vehicle(vehicle("EF-456-GH", Some(today() + ChronoDuration::days(2))))
            .await;
        gateway.fail_insert_for(failing_id).await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.vehicles_notified, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("AB-123-CD"));

        let stored = gateway.notifications().await;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].message.contains("EF-456-GH"));
    }

    #[tokio::test]
    async fn test_vehicle_fetch_failure_does_not_block_documents() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        gateway.fail_vehicle_fetch().await;
        gateway
            .add_document(document("Assurance", Some(today() + ChronoDuration::days(2))))
            .await;

        let summary = reconciler(&gateway).run(today()).await;

        assert_eq!(summary.vehicles_notified, 0);
        assert_eq!(summary.documents_notified, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("vehicles"));
    }

    #[tokio::test]
    async fn test_exhausted_budget_reports_partial_summary() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        gateway
            .add_vehicle(vehicle("AB-123-CD", Some(today() + ChronoDuration::days(1))))
            .await;
        gateway
            .add_document(document("Assurance", Some(today() + ChronoDuration::days(2))))
            .await;

        let job = AlertReconciler::new(gateway.clone(), Duration::ZERO);
        let summary = job.run(today()).await;

        assert!(summary.aborted);
        assert_eq!(summary.vehicles_notified, 0);
        assert_eq!(summary.documents_notified, 0);
        assert_eq!(summary.errors.len(), 1);
        assert!(gateway.notifications().await.is_empty());
    }

    #[test]
    fn test_summary_message() {
        let mut summary = RunSummary {
            vehicles_notified: 2,
            documents_notified: 1,
            errors: Vec::new(),
            aborted: false,
        };
        assert_eq!(
            summary.message(),
            "Alert check complete: 2 maintenance alert(s) and 1 document alert(s) created"
        );

        summary.errors.push("boom".to_string());
        summary.aborted = true;
        assert!(summary.message().contains("1 error(s) collected"));
        assert!(summary.message().contains("run budget exceeded"));
    }
}
