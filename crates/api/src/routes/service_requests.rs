//! Service request routes: listing, the detail/action panel, and lifecycle changes.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    actions_for_role, AddNoteRequest, ApplyActionRequest, AssignProviderRequest,
    CreateServiceRequestRequest, EmptyState, ListPanel, ListServiceRequestsQuery, Notification,
    ServiceRequest, ServiceRequestDetail, ServiceRequestView, Transition, TransitionResponse,
    UserRole,
};
use domain::services::{
    assignment_notification, empty_states, new_request_notification, service_request_detail,
    service_request_view, status_change_notification, NotificationResult,
};
use persistence::repositories::{
    PropertyRepository, ServiceRequestRecord, ServiceRequestRepository, TenantRepository,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::middleware::metrics::{action_label, record_service_request_created, record_transition};

/// Empty state for the request list, by viewer role.
fn empty_state_for(role: UserRole) -> EmptyState {
    match role {
        UserRole::PropertyManager => empty_states::manager_requests(),
        UserRole::Tenant => empty_states::tenant_requests(),
        UserRole::ServiceProvider => empty_states::work_orders(),
    }
}

fn detail_for(record: &ServiceRequestRecord, viewer: UserRole) -> ServiceRequestDetail {
    service_request_detail(
        &record.request,
        record.property.as_slice(),
        record.tenant.as_slice(),
        record.provider.as_slice(),
        viewer,
        Utc::now(),
    )
}

fn transition_response(
    request: &ServiceRequest,
    transition: Transition,
    viewer: UserRole,
) -> TransitionResponse {
    TransitionResponse {
        id: request.id,
        from: transition.from,
        status: request.status,
        updated_at: request.updated_at,
        actions: actions_for_role(viewer, request.status).to_vec(),
    }
}

/// Delivers a notification. Failures are logged and never fail the request.
async fn deliver(state: &AppState, notification: Notification) {
    let user_id = notification.user_id;
    match state.notifications.notify(notification).await {
        NotificationResult::Delivered => {}
        result => warn!(user_id = %user_id, result = ?result, "Notification not delivered"),
    }
}

/// GET /api/v1/service-requests
///
/// Requests visible to the current user, newest first, optionally filtered
/// by `status` and `priority`.
pub async fn list_service_requests(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<ListServiceRequestsQuery>, QueryRejection>,
) -> Result<Json<ListPanel<ServiceRequestView>>, ApiError> {
    let Query(query) = query?;

    let requests = ServiceRequestRepository::new(state.store.clone())
        .list_visible(&user.0, &query)
        .await;
    let properties = PropertyRepository::new(state.store.clone())
        .list_all()
        .await;

    let now = Utc::now();
    let items = requests
        .iter()
        .map(|r| service_request_view(r, &properties, user.role(), now))
        .collect();

    Ok(Json(ListPanel::new(
        "Service Requests",
        items,
        empty_state_for(user.role()),
    )))
}

/// GET /api/v1/service-requests/:id
///
/// The detail panel. Requests the user cannot see are reported as not found.
pub async fn get_service_request(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ServiceRequestDetail>, ApiError> {
    let record = ServiceRequestRepository::new(state.store.clone())
        .find_visible(&user.0, request_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Service request not found".to_string()))?;

    Ok(Json(detail_for(&record, user.role())))
}

/// POST /api/v1/service-requests
///
/// A tenant opens a request against the property they rent. The managing
/// property manager is notified.
pub async fn create_service_request(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CreateServiceRequestRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ServiceRequestDetail>), ApiError> {
    user.require_role(UserRole::Tenant, "submit service requests")?;
    let Json(request) = payload?;
    request.validate()?;

    let tenant = TenantRepository::new(state.store.clone())
        .find_by_id(user.id())
        .await
        .ok_or_else(|| ApiError::Conflict("No rental property on record".to_string()))?;
    let property = PropertyRepository::new(state.store.clone())
        .find_by_id(tenant.property_id)
        .await
        .ok_or_else(|| ApiError::Conflict("No rental property on record".to_string()))?;

    let now = Utc::now();
    let created = ServiceRequest::submit(
        user.id(),
        property.id,
        request.title.trim().to_string(),
        request.description,
        request.priority,
        now,
    );
    let repo = ServiceRequestRepository::new(state.store.clone());
    let created = repo.create(created).await;
    record_service_request_created(created.priority);

    info!(
        user_id = %user.id(),
        service_request_id = %created.id,
        property_id = %property.id,
        priority = %created.priority,
        "Service request submitted"
    );

    deliver(
        &state,
        new_request_notification(property.manager_id, &created, &property.name, now),
    )
    .await;

    let record = ServiceRequestRecord {
        request: created,
        property: Some(property),
        tenant: Some(tenant),
        provider: None,
    };
    Ok((StatusCode::CREATED, Json(detail_for(&record, user.role()))))
}

/// POST /api/v1/service-requests/:id/actions
///
/// The assigned provider accepts, declines or completes a request. Actions
/// not offered for the current status are rejected with 409 and the request
/// is left unchanged.
pub async fn apply_action(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<ApplyActionRequest>, JsonRejection>,
) -> Result<Json<TransitionResponse>, ApiError> {
    user.require_role(UserRole::ServiceProvider, "act on service requests")?;
    let Json(request) = payload?;
    request.validate()?;

    let now = Utc::now();
    let (updated, transition) = ServiceRequestRepository::new(state.store.clone())
        .apply_action(&user.0, request_id, request.action, request.actual_cost, now)
        .await
        .map_err(|err| {
            warn!(
                user_id = %user.id(),
                service_request_id = %request_id,
                action = %request.action,
                error = %err,
                "Service request action rejected"
            );
            ApiError::from(err)
        })?;
    record_transition(action_label(request.action));

    info!(
        user_id = %user.id(),
        service_request_id = %request_id,
        action = %request.action,
        from = %transition.from,
        to = %transition.to,
        "Service request action applied"
    );

    deliver(&state, status_change_notification(&updated, transition, now)).await;

    Ok(Json(transition_response(&updated, transition, user.role())))
}

/// POST /api/v1/service-requests/:id/assign
///
/// A manager hands a pending request to a provider.
pub async fn assign_provider(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<AssignProviderRequest>, JsonRejection>,
) -> Result<Json<TransitionResponse>, ApiError> {
    user.require_role(UserRole::PropertyManager, "assign providers")?;
    let Json(request) = payload?;
    request.validate()?;

    let now = Utc::now();
    let (updated, transition) = ServiceRequestRepository::new(state.store.clone())
        .assign(
            &user.0,
            request_id,
            request.provider_id,
            request.estimated_cost,
            now,
        )
        .await?;
    record_transition("assign");

    info!(
        user_id = %user.id(),
        service_request_id = %request_id,
        provider_id = %request.provider_id,
        "Service provider assigned"
    );

    deliver(
        &state,
        assignment_notification(request.provider_id, &updated, now),
    )
    .await;
    deliver(&state, status_change_notification(&updated, transition, now)).await;

    Ok(Json(transition_response(&updated, transition, user.role())))
}

/// POST /api/v1/service-requests/:id/cancel
///
/// A manager cancels a request that is in progress.
pub async fn cancel_service_request(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<TransitionResponse>, ApiError> {
    user.require_role(UserRole::PropertyManager, "cancel service requests")?;

    let now = Utc::now();
    let (updated, transition) = ServiceRequestRepository::new(state.store.clone())
        .cancel(&user.0, request_id, now)
        .await?;
    record_transition("cancel");

    info!(
        user_id = %user.id(),
        service_request_id = %request_id,
        "Service request cancelled"
    );

    deliver(&state, status_change_notification(&updated, transition, now)).await;

    Ok(Json(transition_response(&updated, transition, user.role())))
}

/// POST /api/v1/service-requests/:id/notes
///
/// Anyone who can see the request may append a note.
pub async fn add_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<AddNoteRequest>, JsonRejection>,
) -> Result<Json<ServiceRequestDetail>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let repo = ServiceRequestRepository::new(state.store.clone());
    repo.add_note(&user.0, request_id, request.note.trim().to_string(), Utc::now())
        .await?;

    info!(
        user_id = %user.id(),
        service_request_id = %request_id,
        "Note added to service request"
    );

    let record = repo
        .find_visible(&user.0, request_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Service request not found".to_string()))?;
    Ok(Json(detail_for(&record, user.role())))
}
