//! Notification routes.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use domain::models::{ListPanel, NotificationView};
use domain::services::{notification_view, notifications_panel};
use persistence::repositories::NotificationRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Notification list with the unread count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationListResponse {
    pub unread: usize,
    #[serde(flatten)]
    pub notifications: ListPanel<NotificationView>,
}

/// GET /api/v1/notifications
///
/// All of the current user's notifications, newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<NotificationListResponse> {
    let notifications = NotificationRepository::new(state.store.clone())
        .list_for_user(user.id())
        .await;
    let unread = notifications.iter().filter(|n| !n.read).count();

    Json(NotificationListResponse {
        unread,
        notifications: notifications_panel(&notifications, notifications.len(), Utc::now()),
    })
}

/// POST /api/v1/notifications/:id/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<NotificationView>, ApiError> {
    let notification = NotificationRepository::new(state.store.clone())
        .mark_read(notification_id, user.id())
        .await?;

    info!(
        user_id = %user.id(),
        notification_id = %notification_id,
        "Notification marked read"
    );

    Ok(Json(notification_view(&notification, Utc::now())))
}
