//! Cron scheduler for periodic reconciliation runs.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use fleetdesk_core::config::alerts::AlertsConfig;
use fleetdesk_core::error::AppError;

use crate::reconciler::AlertReconciler;

/// Cron-based scheduler that triggers the reconciliation job.
///
/// Runs a single process-local job; overlapping invocations across
/// processes are not guarded against.
pub struct AlertScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// The reconciler invoked on every tick.
    reconciler: Arc<AlertReconciler>,
    /// Cron expression (with seconds field) for the runs.
    schedule: String,
}

impl std::fmt::Debug for AlertScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertScheduler")
            .field("schedule", &self.schedule)
            .finish()
    }
}

impl AlertScheduler {
    /// Create a new scheduler around the reconciler.
    pub async fn new(
        reconciler: Arc<AlertReconciler>,
        config: &AlertsConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            reconciler,
            schedule: config.schedule.clone(),
        })
    }

    /// Register the periodic alert check.
    pub async fn register_alert_check(&self) -> Result<(), AppError> {
        let reconciler = Arc::clone(&self.reconciler);
        let job = CronJob::new_async(self.schedule.as_str(), move |_uuid, _lock| {
            let reconciler = Arc::clone(&reconciler);
            Box::pin(async move {
                tracing::debug!("Running scheduled alert check");
                let summary = reconciler.run_now().await;
                if summary.errors.is_empty() {
                    tracing::info!(
                        vehicles = summary.vehicles_notified,
                        documents = summary.documents_notified,
                        "Scheduled alert check complete"
                    );
                } else {
                    tracing::warn!(
                        vehicles = summary.vehicles_notified,
                        documents = summary.documents_notified,
                        errors = ?summary.errors,
                        "Scheduled alert check completed with errors"
                    );
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create alert_check schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add alert_check schedule: {e}")))?;

        tracing::info!(schedule = %self.schedule, "Registered: alert_check");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Alert scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        let mut scheduler = self.scheduler.clone();
        scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Alert scheduler shut down");
        Ok(())
    }
}
