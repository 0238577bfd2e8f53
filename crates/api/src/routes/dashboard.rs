//! Dashboard route.

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use domain::models::Dashboard;
use domain::services::build_dashboard;
use persistence::repositories::{NotificationRepository, UserDataRepository};

use crate::app::AppState;
use crate::extractors::CurrentUser;

/// GET /api/v1/dashboard
///
/// Dashboard for the current user's role.
pub async fn get_dashboard(State(state): State<AppState>, user: CurrentUser) -> Json<Dashboard> {
    let data = UserDataRepository::new(state.store.clone())
        .load(&user.0)
        .await;
    let notifications = NotificationRepository::new(state.store.clone())
        .list_for_user(user.id())
        .await;

    let dashboard = build_dashboard(&data, &notifications, Utc::now());

    info!(
        user_id = %user.id(),
        role = %user.role(),
        service_requests = data.service_requests().len(),
        notifications = notifications.len(),
        "Built dashboard"
    );

    Json(dashboard)
}
