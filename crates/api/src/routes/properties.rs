//! Property routes. Managers only.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use domain::models::{
    ListPanel, ListServiceRequestsQuery, PropertyDetail, PropertyView, UserRole,
};
use domain::services::{count_by_status, empty_states, property_view, service_request_view};
use persistence::repositories::{PropertyRepository, ServiceRequestRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// GET /api/v1/properties
///
/// Properties managed by the current user.
pub async fn list_properties(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ListPanel<PropertyView>>, ApiError> {
    user.require_role(UserRole::PropertyManager, "list properties")?;

    let properties = PropertyRepository::new(state.store.clone())
        .list_for_manager(user.id())
        .await;
    // One snapshot of the manager's requests; property_view picks each property's share
    let requests = ServiceRequestRepository::new(state.store.clone())
        .list_visible(&user.0, &ListServiceRequestsQuery::default())
        .await;

    let items: Vec<PropertyView> = properties
        .iter()
        .map(|property| property_view(property, &requests))
        .collect();

    info!(user_id = %user.id(), count = items.len(), "Listed properties");

    Ok(Json(ListPanel::new(
        "Properties",
        items,
        empty_states::properties(),
    )))
}

/// GET /api/v1/properties/:id
///
/// A managed property with its request breakdown. Properties managed by
/// someone else are reported as not found.
pub async fn get_property(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(property_id): Path<Uuid>,
) -> Result<Json<PropertyDetail>, ApiError> {
    user.require_role(UserRole::PropertyManager, "view properties")?;

    let property = PropertyRepository::new(state.store.clone())
        .find_by_id(property_id)
        .await
        .filter(|p| p.manager_id == user.id())
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    let requests = ServiceRequestRepository::new(state.store.clone())
        .list_for_property(property.id)
        .await;

    let now = Utc::now();
    let properties = std::slice::from_ref(&property);
    let rows = requests
        .iter()
        .map(|r| service_request_view(r, properties, UserRole::PropertyManager, now))
        .collect();

    Ok(Json(PropertyDetail {
        property: property_view(&property, &requests),
        request_counts: count_by_status(&requests),
        service_requests: ListPanel::new(
            "Service Requests",
            rows,
            empty_states::manager_requests(),
        ),
    }))
}
