use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::NotificationService;
use persistence::repositories::NotificationRepository;
use persistence::Store;

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{
    dashboard, documents, health, notifications, properties, service_providers,
    service_requests, users,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
    pub notifications: Arc<dyn NotificationService>,
}

/// Builds the application with in-app notifications written to the store.
pub fn create_app(config: Config, store: Store) -> Router {
    let notifications = Arc::new(NotificationRepository::new(store.clone()));
    create_app_with_notifications(config, store, notifications)
}

/// Builds the application with a caller-supplied notification service.
pub fn create_app_with_notifications(
    config: Config,
    store: Store,
    notifications: Arc<dyn NotificationService>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
        notifications,
    };

    let cors = if config.security.cors_origins.is_empty() {
        // Development default: any origin
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Every v1 route resolves the current user through the CurrentUser extractor
    let api_routes = Router::new()
        .route("/api/v1/me", get(users::get_me))
        .route("/api/v1/context", get(users::get_context))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/properties", get(properties::list_properties))
        .route("/api/v1/properties/:id", get(properties::get_property))
        .route(
            "/api/v1/service-requests",
            get(service_requests::list_service_requests)
                .post(service_requests::create_service_request),
        )
        .route(
            "/api/v1/service-requests/:id",
            get(service_requests::get_service_request),
        )
        .route(
            "/api/v1/service-requests/:id/actions",
            post(service_requests::apply_action),
        )
        .route(
            "/api/v1/service-requests/:id/assign",
            post(service_requests::assign_provider),
        )
        .route(
            "/api/v1/service-requests/:id/cancel",
            post(service_requests::cancel_service_request),
        )
        .route(
            "/api/v1/service-requests/:id/notes",
            post(service_requests::add_note),
        )
        .route(
            "/api/v1/service-providers",
            get(service_providers::list_service_providers),
        )
        .route(
            "/api/v1/service-providers/:id",
            get(service_providers::get_service_provider),
        )
        .route("/api/v1/documents", get(documents::list_documents))
        .route(
            "/api/v1/notifications",
            get(notifications::list_notifications),
        )
        .route(
            "/api/v1/notifications/:id/read",
            post(notifications::mark_notification_read),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
