//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;

/// Query parameters scoping a request to one user's records.
///
/// Authentication is delegated to the surrounding deployment; the API
/// itself only needs to know which user's rows to touch.
#[derive(Debug, Clone, Deserialize)]
pub struct UserScope {
    /// The owning user.
    pub user_id: Uuid,
}
