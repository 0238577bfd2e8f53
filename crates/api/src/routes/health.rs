//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use persistence::metrics::record_store_metrics;
use persistence::StoreStats;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

/// Record counts held by the store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreHealth {
    pub users: usize,
    pub properties: usize,
    pub service_requests: usize,
    pub notifications: usize,
}

impl From<StoreStats> for StoreHealth {
    fn from(stats: StoreStats) -> Self {
        Self {
            users: stats.users,
            properties: stats.properties,
            service_requests: stats.service_requests,
            notifications: stats.notifications,
        }
    }
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// Also refreshes the store gauges.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.store.stats().await;
    record_store_metrics(&stats);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: stats.into(),
    })
}

/// Liveness probe endpoint.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The store lives in process, so being able to take its read lock is enough.
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    let _ = state.store.stats().await;
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
