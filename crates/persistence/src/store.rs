//! In-memory data store.
//!
//! All records live in one [`StoreData`] behind a single `RwLock`. Reads take
//! the read lock; every mutation holds the write lock for its whole
//! read-modify-write.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::models::{
    Document, Notification, Property, ServiceProvider, ServiceRequest, Tenant, User,
};

use crate::fixtures;

/// Store configuration.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Load the demo data set on startup.
    pub seed_fixtures: bool,
}

/// Every record the application knows about.
#[derive(Debug, Clone, Default)]
pub struct StoreData {
    pub users: Vec<User>,
    pub properties: Vec<Property>,
    pub service_requests: Vec<ServiceRequest>,
    pub tenants: Vec<Tenant>,
    pub service_providers: Vec<ServiceProvider>,
    pub notifications: Vec<Notification>,
    pub documents: Vec<Document>,
}

/// Record counts, used for health reporting and gauges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub properties: usize,
    pub service_requests: usize,
    pub notifications: usize,
}

/// Shared handle to the store. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreData>>,
}

impl Store {
    pub fn new(data: StoreData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// Store loaded with the demo data set, timestamps relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(fixtures::seed(now))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }

    pub async fn stats(&self) -> StoreStats {
        let data = self.read().await;
        StoreStats {
            users: data.users.len(),
            properties: data.properties.len(),
            service_requests: data.service_requests.len(),
            notifications: data.notifications.len(),
        }
    }
}

/// Creates the application store.
pub fn create_store(config: &StoreConfig) -> Store {
    if config.seed_fixtures {
        tracing::info!("Seeding store with demo fixtures");
        Store::seeded(Utc::now())
    } else {
        Store::default()
    }
}
