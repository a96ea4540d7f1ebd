//! # fleetdesk-core
//!
//! Core crate for FleetDesk. Contains configuration schemas, shared
//! pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FleetDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
