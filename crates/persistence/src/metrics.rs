//! Store metrics collection.
//!
//! Provides functions for recording store-related metrics.

use metrics::{gauge, histogram};
use std::time::Instant;

use crate::store::StoreStats;

/// Record store operation duration.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record record-count gauges for the store.
pub fn record_store_metrics(stats: &StoreStats) {
    gauge!("store_users_total").set(stats.users as f64);
    gauge!("store_properties_total").set(stats.properties as f64);
    gauge!("store_service_requests_total").set(stats.service_requests as f64);
    gauge!("store_notifications_total").set(stats.notifications as f64);
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("find_service_request_by_id");
/// let result = data.service_requests.iter().find(|r| r.id == id).cloned();
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    operation: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}
