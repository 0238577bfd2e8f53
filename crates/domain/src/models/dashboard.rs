//! Dashboard view models.
//!
//! These are display-ready: amounts and timestamps are already formatted, and
//! every list panel carries its empty state when it has no items.

use serde::Serialize;
use uuid::Uuid;

use super::{
    CurrentUserResponse, DocumentKind, NotificationKind, Priority, RequestAction,
    ServiceRequestStatus,
};

/// Link offered alongside an empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// What a list panel shows when it has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EmptyState {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<CallToAction>,
}

impl EmptyState {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            call_to_action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.call_to_action = Some(CallToAction {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

/// A titled list. `empty_state` is present exactly when `items` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPanel<T> {
    pub title: String,
    pub items: Vec<T>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

impl<T> ListPanel<T> {
    pub fn new(title: impl Into<String>, items: Vec<T>, empty: EmptyState) -> Self {
        let total = items.len();
        Self::with_total(title, items, total, empty)
    }

    /// Panel showing a truncated list of `total` items.
    pub fn with_total(
        title: impl Into<String>,
        items: Vec<T>,
        total: usize,
        empty: EmptyState,
    ) -> Self {
        let empty_state = if items.is_empty() { Some(empty) } else { None };
        Self {
            title: title.into(),
            items,
            total,
            empty_state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Request counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusCounters {
    pub total: usize,
    pub pending: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounters {
    /// Requests not yet completed or cancelled.
    pub fn open(&self) -> usize {
        self.pending + self.assigned + self.in_progress
    }

    pub fn get(&self, status: ServiceRequestStatus) -> usize {
        match status {
            ServiceRequestStatus::Pending => self.pending,
            ServiceRequestStatus::Assigned => self.assigned,
            ServiceRequestStatus::InProgress => self.in_progress,
            ServiceRequestStatus::Completed => self.completed,
            ServiceRequestStatus::Cancelled => self.cancelled,
        }
    }
}

/// Request counts by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PriorityCounters {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub emergency: usize,
}

/// A headline figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A service request row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceRequestView {
    pub id: Uuid,
    pub title: String,
    pub status: ServiceRequestStatus,
    pub status_label: String,
    pub priority: Priority,
    pub priority_label: String,
    pub priority_color: String,
    pub property_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_address: Option<String>,
    pub estimated_cost: Option<String>,
    pub actual_cost: Option<String>,
    pub note_count: usize,
    pub created: String,
    pub updated: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RequestAction>,
}

/// The service request detail/action panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceRequestDetail {
    #[serde(flatten)]
    pub summary: ServiceRequestView,
    pub description: String,
    pub notes: Vec<String>,
    pub tenant_name: Option<String>,
    pub provider_name: Option<String>,
    pub created_date: String,
    pub completed_date: Option<String>,
}

/// A property row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PropertyView {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub units: u32,
    pub occupied_units: u32,
    pub occupancy: String,
    pub monthly_rent: String,
    pub monthly_revenue: String,
    pub open_requests: usize,
}

/// A property with its request breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: PropertyView,
    pub request_counts: StatusCounters,
    pub service_requests: ListPanel<ServiceRequestView>,
}

/// A tenant row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub property_name: String,
    pub unit: String,
    pub lease_end: String,
}

/// A notification row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationView {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub received: String,
}

/// A document row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DocumentView {
    pub id: Uuid,
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ManagerDashboard {
    pub user: CurrentUserResponse,
    pub stats: Vec<StatCard>,
    pub request_counts: StatusCounters,
    pub priority_counts: PriorityCounters,
    pub properties: ListPanel<PropertyView>,
    pub recent_requests: ListPanel<ServiceRequestView>,
    pub tenants: ListPanel<TenantView>,
    pub notifications: ListPanel<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantDashboard {
    pub user: CurrentUserResponse,
    pub stats: Vec<StatCard>,
    pub property: Option<PropertyView>,
    pub request_counts: StatusCounters,
    pub service_requests: ListPanel<ServiceRequestView>,
    pub documents: ListPanel<DocumentView>,
    pub notifications: ListPanel<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderDashboard {
    pub user: CurrentUserResponse,
    pub stats: Vec<StatCard>,
    pub work_order_counts: StatusCounters,
    pub work_orders: ListPanel<ServiceRequestView>,
    pub completed_jobs: ListPanel<ServiceRequestView>,
    pub notifications: ListPanel<NotificationView>,
}

/// Dashboard selected by the viewer's role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    PropertyManager(ManagerDashboard),
    Tenant(TenantDashboard),
    ServiceProvider(ProviderDashboard),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_panel_empty_carries_empty_state() {
        let panel: ListPanel<u32> = ListPanel::new(
            "Properties",
            vec![],
            EmptyState::message("No properties found").with_action("Add Property", "/properties/new"),
        );
        assert!(panel.is_empty());
        let empty = panel.empty_state.unwrap();
        assert_eq!(empty.message, "No properties found");
        assert_eq!(empty.call_to_action.unwrap().href, "/properties/new");
    }

    #[test]
    fn test_list_panel_with_items_has_no_empty_state() {
        let panel = ListPanel::new("Numbers", vec![1, 2], EmptyState::message("None"));
        assert!(panel.empty_state.is_none());
        assert_eq!(panel.total, 2);

        let json = serde_json::to_value(&panel).unwrap();
        assert!(json.get("empty_state").is_none());
    }

    #[test]
    fn test_status_counters_open() {
        let counters = StatusCounters {
            total: 6,
            pending: 2,
            assigned: 1,
            in_progress: 1,
            completed: 1,
            cancelled: 1,
        };
        assert_eq!(counters.open(), 4);
        assert_eq!(counters.get(ServiceRequestStatus::Completed), 1);
    }

    #[test]
    fn test_stat_card_serialization() {
        let card = StatCard::new("Open Requests", 4).with_detail("2 pending");
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["value"], "4");
        assert_eq!(json["detail"], "2 pending");
    }
}
