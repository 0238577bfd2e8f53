//! Service provider directory. Managers pick assignees from it.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use domain::models::{ListPanel, ServiceProvider, UserRole};
use domain::services::empty_states;
use persistence::repositories::ServiceProviderRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// GET /api/v1/service-providers
pub async fn list_service_providers(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ListPanel<ServiceProvider>>, ApiError> {
    user.require_role(UserRole::PropertyManager, "list service providers")?;

    let providers = ServiceProviderRepository::new(state.store.clone())
        .list()
        .await;
    Ok(Json(ListPanel::new(
        "Service Providers",
        providers,
        empty_states::service_providers(),
    )))
}

/// GET /api/v1/service-providers/:id
pub async fn get_service_provider(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<ServiceProvider>, ApiError> {
    user.require_role(UserRole::PropertyManager, "view service providers")?;

    ServiceProviderRepository::new(state.store.clone())
        .find_by_id(provider_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Service provider not found".to_string()))
}
