//! Notification repository.

use uuid::Uuid;

use domain::models::Notification;
use domain::services::{NotificationResult, NotificationService};

use crate::error::RepositoryError;
use crate::metrics::QueryTimer;
use crate::store::Store;

/// Repository for in-app notifications.
#[derive(Clone)]
pub struct NotificationRepository {
    store: Store,
}

impl NotificationRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Notifications addressed to `user_id`, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Notification> {
        let timer = QueryTimer::new("list_notifications_for_user");
        let data = self.store.read().await;
        let mut result: Vec<Notification> = data
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        timer.record();
        result
    }

    /// Number of unread notifications for `user_id`.
    pub async fn unread_count(&self, user_id: Uuid) -> usize {
        let data = self.store.read().await;
        data.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    pub async fn create(&self, notification: Notification) -> Notification {
        let timer = QueryTimer::new("create_notification");
        self.store
            .write()
            .await
            .notifications
            .push(notification.clone());
        timer.record();
        notification
    }

    /// Mark a notification read. Only the recipient may do this; anyone else
    /// gets `NotFound`.
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<Notification, RepositoryError> {
        let timer = QueryTimer::new("mark_notification_read");
        let mut data = self.store.write().await;
        let result = data
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
            .map(|n| {
                n.read = true;
                n.clone()
            })
            .ok_or_else(|| RepositoryError::not_found("Notification", id));
        timer.record();
        result
    }
}

#[async_trait::async_trait]
impl NotificationService for NotificationRepository {
    async fn notify(&self, notification: Notification) -> NotificationResult {
        let known = self
            .store
            .read()
            .await
            .users
            .iter()
            .any(|u| u.id == notification.user_id);
        if !known {
            tracing::warn!(
                user_id = %notification.user_id,
                kind = %notification.kind,
                "Dropping notification for unknown user"
            );
            return NotificationResult::UnknownRecipient;
        }

        tracing::debug!(
            user_id = %notification.user_id,
            kind = %notification.kind,
            "Storing notification"
        );
        self.create(notification).await;
        NotificationResult::Delivered
    }
}
