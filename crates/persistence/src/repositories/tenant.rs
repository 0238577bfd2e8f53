//! Tenant repository.

use uuid::Uuid;

use domain::models::Tenant;

use crate::metrics::QueryTimer;
use crate::store::Store;

#[derive(Clone)]
pub struct TenantRepository {
    store: Store,
}

impl TenantRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Tenant> {
        let timer = QueryTimer::new("find_tenant_by_id");
        let data = self.store.read().await;
        let result = data.tenants.iter().find(|t| t.id == id).cloned();
        timer.record();
        result
    }

    /// Tenants living in properties managed by `manager_id`, sorted by name.
    pub async fn list_for_manager(&self, manager_id: Uuid) -> Vec<Tenant> {
        let timer = QueryTimer::new("list_tenants_for_manager");
        let data = self.store.read().await;
        let mut result: Vec<Tenant> = data
            .tenants
            .iter()
            .filter(|t| {
                data.properties
                    .iter()
                    .any(|p| p.id == t.property_id && p.manager_id == manager_id)
            })
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ids;
    use chrono::Utc;

    #[tokio::test]
    async fn test_tenants_for_manager() {
        let repo = TenantRepository::new(Store::seeded(Utc::now()));
        let tenants = repo.list_for_manager(ids::MANAGER).await;
        let names: Vec<_> = tenants.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["James Carter", "Maria Lopez"]);
        assert!(repo.list_for_manager(ids::NEW_MANAGER).await.is_empty());
    }

    #[tokio::test]
    async fn test_find_tenant() {
        let repo = TenantRepository::new(Store::seeded(Utc::now()));
        assert_eq!(repo.find_by_id(ids::TENANT).await.unwrap().unit, "2B");
        assert!(repo.find_by_id(ids::NEW_TENANT).await.is_none());
    }
}
