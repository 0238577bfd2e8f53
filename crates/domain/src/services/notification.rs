//! In-app notification service.
//!
//! Builds the notifications raised by service request lifecycle events and
//! abstracts over where they are delivered.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::models::{Notification, NotificationKind, ServiceRequest, Transition};

/// Result of a notification delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationResult {
    /// Notification was stored for the recipient.
    Delivered,
    /// Recipient is unknown.
    UnknownRecipient,
    /// Delivery failed (but was non-blocking).
    Failed(String),
}

/// Delivers notifications to users.
#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, notification: Notification) -> NotificationResult;
}

/// Notification for the tenant when their request changes status.
pub fn status_change_notification(
    request: &ServiceRequest,
    transition: Transition,
    now: DateTime<Utc>,
) -> Notification {
    Notification::new(
        request.tenant_id,
        NotificationKind::ServiceRequestUpdate,
        "Service request updated",
        format!(
            "\"{}\" moved from {} to {}",
            request.title,
            transition.from.label(),
            transition.to.label()
        ),
        now,
    )
}

/// Notification for a provider who was assigned a request.
pub fn assignment_notification(
    provider_id: Uuid,
    request: &ServiceRequest,
    now: DateTime<Utc>,
) -> Notification {
    Notification::new(
        provider_id,
        NotificationKind::NewServiceRequest,
        "New work order",
        format!(
            "You have been assigned \"{}\" ({} priority)",
            request.title,
            request.priority.label()
        ),
        now,
    )
}

/// Notification for a manager when a tenant submits a request.
pub fn new_request_notification(
    manager_id: Uuid,
    request: &ServiceRequest,
    property_name: &str,
    now: DateTime<Utc>,
) -> Notification {
    Notification::new(
        manager_id,
        NotificationKind::NewServiceRequest,
        "New service request",
        format!("\"{}\" was submitted for {}", request.title, property_name),
        now,
    )
}

/// Notification service that records instead of delivering.
///
/// Useful in tests; logs every notification it receives.
#[derive(Debug, Default)]
pub struct MockNotificationService {
    /// Whether to simulate failures for testing.
    pub simulate_failure: bool,
    sent: Mutex<Vec<Notification>>,
}

impl MockNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that simulates failures.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Notifications received so far.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl NotificationService for MockNotificationService {
    async fn notify(&self, notification: Notification) -> NotificationResult {
        if self.simulate_failure {
            tracing::warn!(
                user_id = %notification.user_id,
                "Mock notification service simulating failure"
            );
            return NotificationResult::Failed("Simulated failure".to_string());
        }

        tracing::info!(
            user_id = %notification.user_id,
            kind = %notification.kind,
            "Mock: recorded notification"
        );
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
        NotificationResult::Delivered
    }
}
