//! Role-specific dashboard assembly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::{format_currency, format_percent};

use super::analytics::compute_analytics;
use super::counters::{count_by_priority, count_by_status};
use super::views::{
    document_view, notification_view, property_view, service_request_view, tenant_view,
};
use crate::models::{
    CurrentUserResponse, Dashboard, ListPanel, ManagerDashboard, ManagerData,
    Notification, NotificationView, ProviderDashboard, ProviderData, ServiceRequest, StatCard,
    TenantDashboard, TenantData, UserData, UserRole,
};

/// Number of requests shown in the manager's recent-requests panel.
pub const RECENT_REQUEST_LIMIT: usize = 5;

/// Number of notifications shown on a dashboard.
pub const NOTIFICATION_LIMIT: usize = 10;

const NOT_AVAILABLE: &str = "N/A";

/// Empty states for every list panel.
pub mod empty_states {
    use crate::models::EmptyState;

    pub fn properties() -> EmptyState {
        EmptyState::message("No properties found").with_action("Add Property", "/properties/new")
    }

    pub fn manager_requests() -> EmptyState {
        EmptyState::message("No service requests")
    }

    pub fn tenants() -> EmptyState {
        EmptyState::message("No tenants yet").with_action("Add Tenant", "/tenants/new")
    }

    pub fn tenant_requests() -> EmptyState {
        EmptyState::message("No service requests yet")
            .with_action("Submit Request", "/service-requests/new")
    }

    pub fn documents() -> EmptyState {
        EmptyState::message("No documents available")
    }

    pub fn work_orders() -> EmptyState {
        EmptyState::message("No active work orders")
    }

    pub fn completed_jobs() -> EmptyState {
        EmptyState::message("No completed jobs yet")
    }

    pub fn service_providers() -> EmptyState {
        EmptyState::message("No service providers")
    }

    pub fn notifications() -> EmptyState {
        EmptyState::message("No notifications")
    }
}

/// Builds the dashboard matching the context's role.
pub fn build_dashboard(
    data: &UserData,
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> Dashboard {
    match data {
        UserData::PropertyManager(manager) => {
            Dashboard::PropertyManager(manager_dashboard(manager, notifications, now))
        }
        UserData::Tenant(tenant) => Dashboard::Tenant(tenant_dashboard(tenant, notifications, now)),
        UserData::ServiceProvider(provider) => {
            Dashboard::ServiceProvider(provider_dashboard(provider, notifications, now))
        }
    }
}

/// Newest-first notification panel.
pub fn notifications_panel(
    notifications: &[Notification],
    limit: usize,
    now: DateTime<Utc>,
) -> ListPanel<NotificationView> {
    let mut sorted: Vec<&Notification> = notifications.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let items = sorted
        .into_iter()
        .take(limit)
        .map(|n| notification_view(n, now))
        .collect();
    ListPanel::with_total(
        "Notifications",
        items,
        notifications.len(),
        empty_states::notifications(),
    )
}

fn newest_first(requests: &[ServiceRequest]) -> Vec<&ServiceRequest> {
    let mut sorted: Vec<&ServiceRequest> = requests.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

fn manager_dashboard(
    data: &ManagerData,
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> ManagerDashboard {
    let role = UserRole::PropertyManager;
    let request_counts = count_by_status(&data.service_requests);
    let priority_counts = count_by_priority(&data.service_requests);
    let analytics = data
        .analytics
        .clone()
        .or_else(|| compute_analytics(&data.properties, &data.service_requests));

    let total_units: u32 = data.properties.iter().map(|p| p.units).sum();
    let stats = vec![
        StatCard::new("Total Properties", data.properties.len())
            .with_detail(format!("{} units", total_units)),
        StatCard::new(
            "Occupancy Rate",
            analytics
                .as_ref()
                .map(|a| format_percent(a.occupancy_rate))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        StatCard::new("Open Requests", request_counts.open())
            .with_detail(format!("{} pending", request_counts.pending)),
        StatCard::new(
            "Monthly Revenue",
            analytics
                .as_ref()
                .map(|a| format_currency(a.monthly_revenue))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ];

    let properties = ListPanel::new(
        "Properties",
        data.properties
            .iter()
            .map(|p| property_view(p, &data.service_requests))
            .collect(),
        empty_states::properties(),
    );

    let recent = newest_first(&data.service_requests)
        .into_iter()
        .take(RECENT_REQUEST_LIMIT)
        .map(|r| service_request_view(r, &data.properties, role, now))
        .collect();
    let recent_requests = ListPanel::with_total(
        "Recent Service Requests",
        recent,
        data.service_requests.len(),
        empty_states::manager_requests(),
    );

    let tenants = ListPanel::new(
        "Tenants",
        data.tenants
            .iter()
            .map(|t| tenant_view(t, &data.properties))
            .collect(),
        empty_states::tenants(),
    );

    ManagerDashboard {
        user: CurrentUserResponse::from(&data.user),
        stats,
        request_counts,
        priority_counts,
        properties,
        recent_requests,
        tenants,
        notifications: notifications_panel(notifications, NOTIFICATION_LIMIT, now),
    }
}

fn tenant_dashboard(
    data: &TenantData,
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> TenantDashboard {
    let role = UserRole::Tenant;
    let request_counts = count_by_status(&data.service_requests);
    let properties: Vec<_> = data.property.iter().cloned().collect();

    let stats = vec![
        StatCard::new("Open Requests", request_counts.open()),
        StatCard::new("Completed Requests", request_counts.completed),
        StatCard::new(
            "Monthly Rent",
            data.property
                .as_ref()
                .map(|p| format_currency(p.monthly_rent))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ];

    let service_requests = ListPanel::new(
        "My Service Requests",
        newest_first(&data.service_requests)
            .into_iter()
            .map(|r| service_request_view(r, &properties, role, now))
            .collect(),
        empty_states::tenant_requests(),
    );

    let mut documents: Vec<_> = data.documents.iter().collect();
    documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    let documents = ListPanel::new(
        "Documents",
        documents.into_iter().map(|d| document_view(d, now)).collect(),
        empty_states::documents(),
    );

    TenantDashboard {
        user: CurrentUserResponse::from(&data.user),
        stats,
        property: data
            .property
            .as_ref()
            .map(|p| property_view(p, &data.service_requests)),
        request_counts,
        service_requests,
        documents,
        notifications: notifications_panel(notifications, NOTIFICATION_LIMIT, now),
    }
}

fn provider_dashboard(
    data: &ProviderData,
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> ProviderDashboard {
    let role = UserRole::ServiceProvider;
    let all: Vec<&ServiceRequest> = data
        .work_orders
        .iter()
        .chain(data.completed_jobs.iter())
        .collect();
    let work_order_counts = count_by_status(&all);

    let earnings: Decimal = data
        .completed_jobs
        .iter()
        .filter_map(|job| job.actual_cost)
        .sum();

    let stats = vec![
        StatCard::new("Active Work Orders", data.work_orders.len()).with_detail(format!(
            "{} awaiting acceptance",
            work_order_counts.assigned
        )),
        StatCard::new("Completed Jobs", data.completed_jobs.len()),
        StatCard::new("Total Earnings", format_currency(earnings)),
    ];

    // Most urgent first, oldest first within a priority.
    let mut orders: Vec<&ServiceRequest> = data.work_orders.iter().collect();
    orders.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    let work_orders = ListPanel::new(
        "Work Orders",
        orders
            .into_iter()
            .map(|r| service_request_view(r, &data.properties, role, now))
            .collect(),
        empty_states::work_orders(),
    );

    let mut jobs: Vec<&ServiceRequest> = data.completed_jobs.iter().collect();
    jobs.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    let completed_jobs = ListPanel::new(
        "Completed Jobs",
        jobs.into_iter()
            .map(|r| service_request_view(r, &data.properties, role, now))
            .collect(),
        empty_states::completed_jobs(),
    );

    ProviderDashboard {
        user: CurrentUserResponse::from(&data.user),
        stats,
        work_order_counts,
        work_orders,
        completed_jobs,
        notifications: notifications_panel(notifications, NOTIFICATION_LIMIT, now),
    }
}
