//! Driver entity.

pub mod model;

pub use model::Driver;
