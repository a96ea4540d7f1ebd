//! Alert reconciliation trigger handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// POST /api/alerts/check
///
/// Runs one reconciliation pass and answers 200 with a summary message,
/// even when per-item errors were collected. A run that dies before
/// producing a summary answers 500 with `{ "error": ... }`.
pub async fn check_alerts(State(state): State<AppState>) -> Response {
    let reconciler = Arc::clone(&state.reconciler);
    let outcome = tokio::spawn(async move { reconciler.run_now().await }).await;

    match outcome {
        Ok(summary) => {
            if !summary.errors.is_empty() {
                tracing::warn!(errors = ?summary.errors, "Alert check collected errors");
            }
            (
                StatusCode::OK,
                Json(serde_json::json!({ "message": summary.message() })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Alert check aborted unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("alert check aborted: {e}") })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::to_bytes;
    use chrono::{Duration as ChronoDuration, Utc};
    use uuid::Uuid;

    use fleetdesk_alerts::gateway::MemoryAlertGateway;
    use fleetdesk_alerts::reconciler::AlertReconciler;
    use fleetdesk_core::config::{AppConfig, DatabaseConfig};
    use fleetdesk_database::DatabasePool;
    use fleetdesk_database::repositories::NotificationRepository;
    use fleetdesk_entity::vehicle::Vehicle;

    use super::*;

    fn test_state(gateway: Arc<MemoryAlertGateway>) -> AppState {
        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://fleet@localhost/fleetdesk_test".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            alerts: Default::default(),
            logging: Default::default(),
        };
        // Lazy pool: the notification endpoints are not exercised here,
        // so no connection is ever opened.
        let database = DatabasePool::connect_lazy(&config.database).expect("lazy pool");
        let reconciler = Arc::new(AlertReconciler::new(gateway, Duration::from_secs(30)));
        AppState {
            config: Arc::new(config),
            notification_repo: Arc::new(NotificationRepository::new(database.pool().clone())),
            database,
            reconciler,
        }
    }

    #[tokio::test]
    async fn test_check_alerts_answers_with_summary_message() {
        let gateway = Arc::new(MemoryAlertGateway::new());
        let today = Utc::now().date_naive();
        gateway
            .add_vehicle(Vehicle {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                make: "Renault".to_string(),
                model: "Kangoo".to_string(),
                plate: "AB-123-CD".to_string(),
                next_maintenance_date: Some(today + ChronoDuration::days(3)),
                created_at: Utc::now(),
            })
            .await;

        let response = check_alerts(State(test_state(gateway.clone()))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        let message = body["message"].as_str().expect("message field");
        assert!(message.contains("1 maintenance alert(s)"));
        assert_eq!(gateway.notifications().await.len(), 1);
    }
}
