//! Concrete repository implementations, one per entity.

pub mod document;
pub mod driver;
pub mod notification;
pub mod vehicle;

pub use document::DocumentRepository;
pub use driver::DriverRepository;
pub use notification::NotificationRepository;
pub use vehicle::VehicleRepository;
