//! FleetDesk Server — Fleet Management Back Office
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use fleetdesk_alerts::gateway::{AlertGateway, PgAlertGateway};
use fleetdesk_alerts::reconciler::AlertReconciler;
use fleetdesk_alerts::scheduler::AlertScheduler;
use fleetdesk_core::config::AppConfig;
use fleetdesk_core::error::AppError;
use fleetdesk_database::repositories::{
    DocumentRepository, DriverRepository, NotificationRepository, VehicleRepository,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("FLEETDESK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FleetDesk v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let database = fleetdesk_database::DatabasePool::connect(&config.database).await?;
    fleetdesk_database::migration::run_migrations(database.pool()).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let vehicle_repo = Arc::new(VehicleRepository::new(database.pool().clone()));
    let driver_repo = Arc::new(DriverRepository::new(database.pool().clone()));
    let document_repo = Arc::new(DocumentRepository::new(database.pool().clone()));
    let notification_repo = Arc::new(NotificationRepository::new(database.pool().clone()));

    // ── Step 3: Initialize the reconciliation job ────────────────
    let gateway: Arc<dyn AlertGateway> = Arc::new(PgAlertGateway::new(
        Arc::clone(&vehicle_repo),
        Arc::clone(&driver_repo),
        Arc::clone(&document_repo),
        Arc::clone(&notification_repo),
    ));
    let reconciler = Arc::new(AlertReconciler::new(
        Arc::clone(&gateway),
        Duration::from_secs(config.alerts.run_budget_seconds),
    ));

    // ── Step 4: Start the scheduler ──────────────────────────────
    let scheduler = if config.alerts.enabled {
        let scheduler = AlertScheduler::new(Arc::clone(&reconciler), &config.alerts).await?;
        scheduler.register_alert_check().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Alert scheduler disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = fleetdesk_api::state::AppState {
        config: Arc::new(config.clone()),
        database: database.clone(),
        notification_repo,
        reconciler,
    };

    let app = fleetdesk_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FleetDesk server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 6: Tear down background tasks ───────────────────────
    if let Some(scheduler) = scheduler {
        scheduler.shutdown().await?;
    }
    database.close().await;

    tracing::info!("FleetDesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
