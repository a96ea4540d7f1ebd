//! # fleetdesk-entity
//!
//! Domain entity models for FleetDesk. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod document;
pub mod driver;
pub mod notification;
pub mod vehicle;
