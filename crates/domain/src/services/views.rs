//! Builders turning domain records into display rows.
//!
//! References between records are resolved by linear search. Missing
//! references fall back to placeholder text instead of failing.

use chrono::{DateTime, Utc};
use shared::{format_currency, format_date, format_percent, format_relative_time};

use crate::models::{
    actions_for_role, find_property, Document, DocumentView, Notification, NotificationView,
    Property, PropertyView, ServiceProvider, ServiceRequest, ServiceRequestDetail,
    ServiceRequestView, Tenant, TenantView, UserRole,
};

/// Placeholder for a request whose property cannot be found.
pub const UNKNOWN_PROPERTY: &str = "Unknown property";

/// Builds a request row. Actions are included only for roles that act on requests.
pub fn service_request_view(
    request: &ServiceRequest,
    properties: &[Property],
    viewer: UserRole,
    now: DateTime<Utc>,
) -> ServiceRequestView {
    let property = find_property(properties, request.property_id);

    ServiceRequestView {
        id: request.id,
        title: request.title.clone(),
        status: request.status,
        status_label: request.status.label().to_string(),
        priority: request.priority,
        priority_label: request.priority.label().to_string(),
        priority_color: request.priority.badge_color().to_string(),
        property_name: property
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROPERTY.to_string()),
        property_address: property.map(|p| p.address.clone()),
        estimated_cost: request.estimated_cost.map(format_currency),
        actual_cost: request.actual_cost.map(format_currency),
        note_count: request.notes.len(),
        created: format_relative_time(request.created_at, now),
        updated: format_relative_time(request.updated_at, now),
        actions: actions_for_role(viewer, request.status).to_vec(),
    }
}

/// Builds the detail/action panel for one request.
pub fn service_request_detail(
    request: &ServiceRequest,
    properties: &[Property],
    tenants: &[Tenant],
    providers: &[ServiceProvider],
    viewer: UserRole,
    now: DateTime<Utc>,
) -> ServiceRequestDetail {
    let tenant_name = tenants
        .iter()
        .find(|t| t.id == request.tenant_id)
        .map(|t| t.name.clone());
    let provider_name = request.assigned_provider_id.and_then(|provider_id| {
        providers
            .iter()
            .find(|p| p.id == provider_id)
            .map(|p| format!("{} ({})", p.name, p.company))
    });

    ServiceRequestDetail {
        summary: service_request_view(request, properties, viewer, now),
        description: request.description.clone(),
        notes: request.notes.clone(),
        tenant_name,
        provider_name,
        created_date: format_date(request.created_at),
        completed_date: request.completed_at.map(format_date),
    }
}

/// Builds a property row; `requests` may span several properties.
pub fn property_view(property: &Property, requests: &[ServiceRequest]) -> PropertyView {
    let open_requests = requests
        .iter()
        .filter(|r| r.property_id == property.id && r.status.is_open())
        .count();

    PropertyView {
        id: property.id,
        name: property.name.clone(),
        address: property.address.clone(),
        units: property.units,
        occupied_units: property.occupied_units,
        occupancy: format_percent(property.occupancy_rate()),
        monthly_rent: format_currency(property.monthly_rent),
        monthly_revenue: format_currency(property.monthly_revenue()),
        open_requests,
    }
}

pub fn tenant_view(tenant: &Tenant, properties: &[Property]) -> TenantView {
    TenantView {
        id: tenant.id,
        name: tenant.name.clone(),
        email: tenant.email.clone(),
        property_name: find_property(properties, tenant.property_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROPERTY.to_string()),
        unit: tenant.unit.clone(),
        lease_end: format_date(tenant.lease_end),
    }
}

pub fn notification_view(notification: &Notification, now: DateTime<Utc>) -> NotificationView {
    NotificationView {
        id: notification.id,
        title: notification.title.clone(),
        message: notification.message.clone(),
        kind: notification.kind,
        read: notification.read,
        received: format_relative_time(notification.created_at, now),
    }
}

pub fn document_view(document: &Document, now: DateTime<Utc>) -> DocumentView {
    DocumentView {
        id: document.id,
        name: document.name.clone(),
        kind: document.kind,
        uploaded: format_relative_time(document.uploaded_at, now),
    }
}
