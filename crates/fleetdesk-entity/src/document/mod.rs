//! Document entity.

pub mod model;

pub use model::Document;
