//! Current user routes.

use axum::{extract::State, Json};
use tracing::debug;

use domain::models::{CurrentUserResponse, UserData};
use persistence::repositories::UserDataRepository;

use crate::app::AppState;
use crate::extractors::CurrentUser;

/// GET /api/v1/me
pub async fn get_me(user: CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse::from(&user.0))
}

/// GET /api/v1/context
///
/// The raw role-specific data context behind the current user's views.
pub async fn get_context(State(state): State<AppState>, user: CurrentUser) -> Json<UserData> {
    let data = UserDataRepository::new(state.store.clone())
        .load(&user.0)
        .await;

    debug!(user_id = %user.id(), role = %user.role(), "Loaded user context");

    Json(data)
}
