//! Service provider repository.

use uuid::Uuid;

use domain::models::ServiceProvider;

use crate::metrics::QueryTimer;
use crate::store::Store;

#[derive(Clone)]
pub struct ServiceProviderRepository {
    store: Store,
}

impl ServiceProviderRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<ServiceProvider> {
        let timer = QueryTimer::new("find_service_provider_by_id");
        let data = self.store.read().await;
        let result = data.service_providers.iter().find(|p| p.id == id).cloned();
        timer.record();
        result
    }

    /// All providers, sorted by company.
    pub async fn list(&self) -> Vec<ServiceProvider> {
        let timer = QueryTimer::new("list_service_providers");
        let mut result = self.store.read().await.service_providers.clone();
        result.sort_by(|a, b| a.company.cmp(&b.company));
        timer.record();
        result
    }
}
