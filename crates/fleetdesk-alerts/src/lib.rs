//! Alert reconciliation for FleetDesk.
//!
//! This crate provides:
//! - The gateway interface the reconciliation job reads and writes through,
//!   with PostgreSQL and in-memory implementations
//! - The due-date scanner for vehicle maintenance and document expiry
//! - The duplicate suppressor that avoids re-notifying unread alerts
//! - The notification composer
//! - The job driver that orchestrates a full reconciliation pass
//! - A cron scheduler for periodic runs

pub mod compose;
pub mod gateway;
pub mod reconciler;
pub mod scanner;
pub mod scheduler;
pub mod suppress;

pub use gateway::AlertGateway;
pub use reconciler::{AlertReconciler, RunSummary};
pub use scheduler::AlertScheduler;

#[cfg(test)]
pub(crate) mod testutil;
