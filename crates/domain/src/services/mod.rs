//! Domain services for Property Hub.
//!
//! Services contain business logic that operates on domain models.

pub mod analytics;
pub mod counters;
pub mod dashboard;
pub mod notification;
pub mod views;

pub use analytics::compute_analytics;
pub use counters::{count_by_priority, count_by_status, count_with_priority, count_with_status};
pub use dashboard::{build_dashboard, empty_states, notifications_panel};
pub use notification::{
    assignment_notification, new_request_notification, status_change_notification,
    MockNotificationService, NotificationResult, NotificationService,
};
pub use views::{
    document_view, notification_view, property_view, service_request_detail,
    service_request_view, tenant_view,
};
