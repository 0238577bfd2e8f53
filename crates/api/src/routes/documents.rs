//! Tenant document routes.

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::debug;

use domain::models::{DocumentView, ListPanel, UserRole};
use domain::services::{document_view, empty_states};
use persistence::repositories::DocumentRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// GET /api/v1/documents
///
/// The current tenant's documents, newest upload first.
pub async fn list_documents(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ListPanel<DocumentView>>, ApiError> {
    user.require_role(UserRole::Tenant, "view documents")?;

    let documents = DocumentRepository::new(state.store.clone())
        .list_for_tenant(user.id())
        .await;
    debug!(user_id = %user.id(), count = documents.len(), "Listed documents");

    let now = Utc::now();
    let items = documents.iter().map(|d| document_view(d, now)).collect();
    Ok(Json(ListPanel::new(
        "Documents",
        items,
        empty_states::documents(),
    )))
}
