//! Application state shared across all handlers.

use std::sync::Arc;

use fleetdesk_alerts::reconciler::AlertReconciler;
use fleetdesk_core::config::AppConfig;
use fleetdesk_database::DatabasePool;
use fleetdesk_database::repositories::NotificationRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub database: DatabasePool,
    /// Notification repository for the read-state endpoints.
    pub notification_repo: Arc<NotificationRepository>,
    /// Alert reconciliation job driver.
    pub reconciler: Arc<AlertReconciler>,
}
