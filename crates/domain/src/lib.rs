//! Domain layer for the Property Hub backend.
//!
//! This crate contains:
//! - Domain models (users, properties, service requests, the role-tagged data context)
//! - The service request status/action model
//! - Dashboard view models and the services that build them

pub mod models;
pub mod services;
