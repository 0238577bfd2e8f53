//! Property repository.

use uuid::Uuid;

use domain::models::Property;

use crate::metrics::QueryTimer;
use crate::store::Store;

/// Repository for property lookups.
#[derive(Clone)]
pub struct PropertyRepository {
    store: Store,
}

impl PropertyRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find a property by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Option<Property> {
        let timer = QueryTimer::new("find_property_by_id");
        let data = self.store.read().await;
        let result = data.properties.iter().find(|p| p.id == id).cloned();
        timer.record();
        result
    }

    /// List properties managed by `manager_id`, in name order.
    pub async fn list_for_manager(&self, manager_id: Uuid) -> Vec<Property> {
        let timer = QueryTimer::new("list_properties_for_manager");
        let data = self.store.read().await;
        let mut result: Vec<Property> = data
            .properties
            .iter()
            .filter(|p| p.manager_id == manager_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        timer.record();
        result
    }

    /// List every property.
    pub async fn list_all(&self) -> Vec<Property> {
        let timer = QueryTimer::new("list_properties");
        let result = self.store.read().await.properties.clone();
        timer.record();
        result
    }
}
