//! Loads the role-specific data context for a user.

use domain::models::{
    ManagerData, ProviderData, ServiceRequestStatus, TenantData, User, UserData, UserRole,
};
use domain::services::compute_analytics;

use crate::metrics::QueryTimer;
use crate::repositories::service_request::is_visible;
use crate::store::{Store, StoreData};

#[derive(Clone)]
pub struct UserDataRepository {
    store: Store,
}

impl UserDataRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Snapshot of everything `user`'s views need, read under one lock.
    pub async fn load(&self, user: &User) -> UserData {
        let timer = QueryTimer::new("load_user_data");
        let data = self.store.read().await;
        let result = match user.role {
            UserRole::PropertyManager => UserData::PropertyManager(manager_data(&data, user)),
            UserRole::Tenant => UserData::Tenant(tenant_data(&data, user)),
            UserRole::ServiceProvider => UserData::ServiceProvider(provider_data(&data, user)),
        };
        timer.record();
        result
    }
}

fn manager_data(data: &StoreData, user: &User) -> ManagerData {
    let mut properties: Vec<_> = data
        .properties
        .iter()
        .filter(|p| p.manager_id == user.id)
        .cloned()
        .collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    let mut service_requests: Vec<_> = data
        .service_requests
        .iter()
        .filter(|r| is_visible(data, user, r))
        .cloned()
        .collect();
    service_requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut tenants: Vec<_> = data
        .tenants
        .iter()
        .filter(|t| properties.iter().any(|p| p.id == t.property_id))
        .cloned()
        .collect();
    tenants.sort_by(|a, b| a.name.cmp(&b.name));

    let analytics = compute_analytics(&properties, &service_requests);

    ManagerData {
        user: user.clone(),
        properties,
        service_requests,
        tenants,
        service_providers: data.service_providers.clone(),
        analytics,
    }
}

fn tenant_data(data: &StoreData, user: &User) -> TenantData {
    let property = data
        .tenants
        .iter()
        .find(|t| t.id == user.id)
        .and_then(|t| data.properties.iter().find(|p| p.id == t.property_id))
        .cloned();

    let mut service_requests: Vec<_> = data
        .service_requests
        .iter()
        .filter(|r| r.tenant_id == user.id)
        .cloned()
        .collect();
    service_requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut documents: Vec<_> = data
        .documents
        .iter()
        .filter(|d| d.tenant_id == user.id)
        .cloned()
        .collect();
    documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

    TenantData {
        user: user.clone(),
        property,
        service_requests,
        documents,
    }
}

fn provider_data(data: &StoreData, user: &User) -> ProviderData {
    let assigned: Vec<_> = data
        .service_requests
        .iter()
        .filter(|r| r.assigned_provider_id == Some(user.id))
        .collect();

    let work_orders = assigned
        .iter()
        .filter(|r| {
            matches!(
                r.status,
                ServiceRequestStatus::Assigned | ServiceRequestStatus::InProgress
            )
        })
        .map(|r| (*r).clone())
        .collect();

    let mut completed_jobs: Vec<_> = assigned
        .iter()
        .filter(|r| r.status == ServiceRequestStatus::Completed)
        .map(|r| (*r).clone())
        .collect();
    completed_jobs.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    let properties = data
        .properties
        .iter()
        .filter(|p| assigned.iter().any(|r| r.property_id == p.id))
        .cloned()
        .collect();

    ProviderData {
        user: user.clone(),
        work_orders,
        completed_jobs,
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ids;
    use crate::repositories::UserRepository;
    use chrono::Utc;

    async fn load(id: uuid::Uuid) -> UserData {
        let store = Store::seeded(Utc::now());
        let user = UserRepository::new(store.clone())
            .find_by_id(id)
            .await
            .unwrap();
        UserDataRepository::new(store).load(&user).await
    }

    #[tokio::test]
    async fn test_manager_context() {
        let UserData::PropertyManager(data) = load(ids::MANAGER).await else {
            panic!("expected manager data");
        };
        assert_eq!(data.properties.len(), 3);
        assert_eq!(data.service_requests.len(), 6);
        assert_eq!(data.tenants.len(), 2);
        assert_eq!(data.service_providers.len(), 2);
        assert!(data.analytics.is_some());
    }

    #[tokio::test]
    async fn test_new_manager_context_is_empty() {
        let UserData::PropertyManager(data) = load(ids::NEW_MANAGER).await else {
            panic!("expected manager data");
        };
        assert!(data.properties.is_empty());
        assert!(data.service_requests.is_empty());
        assert!(data.tenants.is_empty());
        assert!(data.analytics.is_none());
    }

    #[tokio::test]
    async fn test_tenant_context() {
        let UserData::Tenant(data) = load(ids::TENANT).await else {
            panic!("expected tenant data");
        };
        assert_eq!(data.property.unwrap().id, ids::SUNSET_APARTMENTS);
        assert_eq!(data.service_requests.len(), 4);
        assert_eq!(data.documents.len(), 2);

        let UserData::Tenant(data) = load(ids::NEW_TENANT).await else {
            panic!("expected tenant data");
        };
        assert!(data.property.is_none());
        assert!(data.service_requests.is_empty());
    }

    #[tokio::test]
    async fn test_provider_context() {
        let UserData::ServiceProvider(data) = load(ids::PROVIDER).await else {
            panic!("expected provider data");
        };
        assert_eq!(data.work_orders.len(), 2);
        assert_eq!(data.completed_jobs.len(), 1);
        assert_eq!(data.completed_jobs[0].id, ids::GARBAGE_DISPOSAL);
        assert_eq!(data.properties.len(), 2);

        let UserData::ServiceProvider(data) = load(ids::PROVIDER_ELECTRIC).await else {
            panic!("expected provider data");
        };
        // The cancelled window job is neither open nor completed.
        assert_eq!(data.work_orders.len(), 1);
        assert!(data.completed_jobs.is_empty());
    }
}
