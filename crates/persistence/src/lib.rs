//! Persistence layer for Property Hub.
//!
//! This crate contains:
//! - The shared in-memory store and its demo data set
//! - Repository implementations
//! - Store operation metrics

pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use error::RepositoryError;
pub use store::{create_store, Store, StoreConfig, StoreData, StoreStats};
