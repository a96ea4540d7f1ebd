//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fleetdesk_core::error::{AppError, ErrorKind};
use fleetdesk_core::result::AppResult;
use fleetdesk_core::types::pagination::{PageRequest, PageResponse};
use fleetdesk_entity::notification::{
    NewNotification, Notification, NotificationStatus, RelatedEntityKind,
};

/// Repository for notification persistence and read-state transitions.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new notification and return the stored row.
    pub async fn create(&self, new: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
             (user_id, title, message, kind, status, related_entity_id, related_entity_kind) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(new.user_id)
        .bind(&new.title)
        .bind(&new.message)
        .bind(new.kind)
        .bind(new.status)
        .bind(new.related_entity_id)
        .bind(new.related_entity_kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Find an unread notification for the same related record whose
    /// message contains the given substring.
    ///
    /// The substring match is a heuristic equivalence test, not a strong
    /// key; read and archived notifications never match.
    pub async fn find_unread_equivalent(
        &self,
        related_entity_id: Uuid,
        related_entity_kind: RelatedEntityKind,
        message_contains: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE user_id = $1 AND related_entity_id = $2 AND related_entity_kind = $3 \
               AND status = $4 AND position($5 in message) > 0 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .bind(related_entity_id)
        .bind(related_entity_kind)
        .bind(NotificationStatus::Unread)
        .bind(message_contains)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search notifications", e)
        })
    }

    /// List non-archived notifications for a user, newest first.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND status <> $2",
        )
        .bind(user_id)
        .bind(NotificationStatus::Archived)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
        })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 AND status <> $2 \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(user_id)
        .bind(NotificationStatus::Archived)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(NotificationStatus::Unread)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE notifications SET status = $3 WHERE id = $1 AND user_id = $2 AND status = $4",
        )
        .bind(notification_id)
        .bind(user_id)
        .bind(NotificationStatus::Read)
        .bind(NotificationStatus::Unread)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(())
    }

    /// Mark all unread notifications as read for a user.
    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<i64> {
        let result = sqlx::query(
            "UPDATE notifications SET status = $2 WHERE user_id = $1 AND status = $3",
        )
        .bind(user_id)
        .bind(NotificationStatus::Read)
        .bind(NotificationStatus::Unread)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected() as i64)
    }

    /// Archive a notification.
    pub async fn archive(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET status = $3 WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .bind(NotificationStatus::Archived)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to archive notification", e)
            })?;
        Ok(())
    }
}
