//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use fleetdesk_core::types::pagination::{PageRequest, PageResponse};
use fleetdesk_entity::notification::Notification;

use crate::dto::request::UserScope;
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(scope): Query<UserScope>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let result = state
        .notification_repo
        .find_by_user(scope.user_id, &page)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Query(scope): Query<UserScope>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_repo.count_unread(scope.user_id).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<UserScope>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_repo.mark_read(id, scope.user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Marked as read".to_string(),
    })))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    Query(scope): Query<UserScope>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let marked = state.notification_repo.mark_all_read(scope.user_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "marked": marked } }),
    ))
}

/// PUT /api/notifications/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<UserScope>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_repo.archive(id, scope.user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Archived".to_string(),
    })))
}
