//! HTTP route handlers.

pub mod dashboard;
pub mod documents;
pub mod health;
pub mod notifications;
pub mod properties;
pub mod service_providers;
pub mod service_requests;
pub mod users;
