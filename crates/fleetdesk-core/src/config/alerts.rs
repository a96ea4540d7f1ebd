//! Alert reconciliation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the periodic alert reconciliation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Whether the scheduled reconciliation is enabled. The HTTP trigger
    /// endpoint is always available.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression (with seconds) for the scheduled runs.
    #[serde(default = "default_schedule")]
    pub schedule: String,
    /// Wall-clock budget for a single reconciliation run, in seconds.
    /// Items not processed within the budget are skipped and the run
    /// reports a partial summary.
    #[serde(default = "default_run_budget")]
    pub run_budget_seconds: u64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            schedule: default_schedule(),
            run_budget_seconds: default_run_budget(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_schedule() -> String {
    // Daily at 07:00
    "0 0 7 * * *".to_string()
}

fn default_run_budget() -> u64 {
    30
}
