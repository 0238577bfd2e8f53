//! In-app notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ServiceRequestUpdate,
    NewServiceRequest,
    Announcement,
    Reminder,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::ServiceRequestUpdate => write!(f, "service_request_update"),
            NotificationKind::NewServiceRequest => write!(f, "new_service_request"),
            NotificationKind::Announcement => write!(f, "announcement"),
            NotificationKind::Reminder => write!(f, "reminder"),
        }
    }
}

/// A message addressed to a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            message: message.into(),
            kind,
            read: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_new_is_unread() {
        let n = Notification::new(
            Uuid::new_v4(),
            NotificationKind::Announcement,
            "Water shutoff",
            "Tuesday 9am-noon",
            Utc::now(),
        );
        assert!(!n.read);
        assert_eq!(n.title, "Water shutoff");
    }

    #[test]
    fn test_notification_kind_display() {
        assert_eq!(
            NotificationKind::ServiceRequestUpdate.to_string(),
            "service_request_update"
        );
        assert_eq!(NotificationKind::Reminder.to_string(), "reminder");
    }
}
