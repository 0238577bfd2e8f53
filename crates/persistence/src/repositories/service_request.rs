//! Service request repository.
//!
//! Lifecycle changes are applied to a copy of the record and written back only
//! when the domain accepts them, so a rejected change leaves the store as it was.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use domain::models::{
    ActionKind, ListServiceRequestsQuery, Property, ServiceProvider, ServiceRequest, Tenant,
    Transition, User, UserRole,
};

use crate::error::RepositoryError;
use crate::metrics::QueryTimer;
use crate::store::{Store, StoreData};

const ENTITY: &str = "Service request";

/// Whether `user` may see `request`.
///
/// Managers see requests on properties they manage, tenants see their own,
/// providers see requests assigned to them.
pub fn is_visible(data: &StoreData, user: &User, request: &ServiceRequest) -> bool {
    match user.role {
        UserRole::PropertyManager => data
            .properties
            .iter()
            .any(|p| p.id == request.property_id && p.manager_id == user.id),
        UserRole::Tenant => request.tenant_id == user.id,
        UserRole::ServiceProvider => request.assigned_provider_id == Some(user.id),
    }
}

/// A request with its referenced records resolved.
#[derive(Debug, Clone)]
pub struct ServiceRequestRecord {
    pub request: ServiceRequest,
    pub property: Option<Property>,
    pub tenant: Option<Tenant>,
    pub provider: Option<ServiceProvider>,
}

/// Repository for service request operations.
#[derive(Clone)]
pub struct ServiceRequestRepository {
    store: Store,
}

impl ServiceRequestRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find a request by ID regardless of visibility.
    pub async fn find_by_id(&self, id: Uuid) -> Option<ServiceRequest> {
        let timer = QueryTimer::new("find_service_request_by_id");
        let data = self.store.read().await;
        let result = data.service_requests.iter().find(|r| r.id == id).cloned();
        timer.record();
        result
    }

    /// Find a request `user` may see, with its references resolved.
    pub async fn find_visible(&self, user: &User, id: Uuid) -> Option<ServiceRequestRecord> {
        let timer = QueryTimer::new("find_visible_service_request");
        let data = self.store.read().await;
        let result = data
            .service_requests
            .iter()
            .find(|r| r.id == id && is_visible(&data, user, r))
            .map(|r| ServiceRequestRecord {
                request: r.clone(),
                property: data
                    .properties
                    .iter()
                    .find(|p| p.id == r.property_id)
                    .cloned(),
                tenant: data.tenants.iter().find(|t| t.id == r.tenant_id).cloned(),
                provider: r.assigned_provider_id.and_then(|provider_id| {
                    data.service_providers
                        .iter()
                        .find(|p| p.id == provider_id)
                        .cloned()
                }),
            });
        timer.record();
        result
    }

    /// List requests `user` may see that match `query`, newest first.
    pub async fn list_visible(
        &self,
        user: &User,
        query: &ListServiceRequestsQuery,
    ) -> Vec<ServiceRequest> {
        let timer = QueryTimer::new("list_visible_service_requests");
        let data = self.store.read().await;
        let mut result: Vec<ServiceRequest> = data
            .service_requests
            .iter()
            .filter(|r| is_visible(&data, user, r) && query.matches(r))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        timer.record();
        result
    }

    /// List all requests raised against a property, newest first.
    pub async fn list_for_property(&self, property_id: Uuid) -> Vec<ServiceRequest> {
        let timer = QueryTimer::new("list_service_requests_for_property");
        let data = self.store.read().await;
        let mut result: Vec<ServiceRequest> = data
            .service_requests
            .iter()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        timer.record();
        result
    }

    /// Store a new request.
    pub async fn create(&self, request: ServiceRequest) -> ServiceRequest {
        let timer = QueryTimer::new("create_service_request");
        self.store.write().await.service_requests.push(request.clone());
        timer.record();
        request
    }

    /// Apply a provider action. A completion may record the final cost.
    pub async fn apply_action(
        &self,
        actor: &User,
        id: Uuid,
        action: ActionKind,
        actual_cost: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> Result<(ServiceRequest, Transition), RepositoryError> {
        self.update(actor, id, "apply_service_request_action", |request| {
            let transition = request.apply_action(action, now)?;
            if action == ActionKind::Complete && actual_cost.is_some() {
                request.actual_cost = actual_cost;
            }
            Ok(transition)
        })
        .await
    }

    /// Assign a provider to a pending request.
    pub async fn assign(
        &self,
        actor: &User,
        id: Uuid,
        provider_id: Uuid,
        estimated_cost: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> Result<(ServiceRequest, Transition), RepositoryError> {
        let provider_known = self
            .store
            .read()
            .await
            .service_providers
            .iter()
            .any(|p| p.id == provider_id);
        if !provider_known {
            return Err(RepositoryError::not_found("Service provider", provider_id));
        }

        self.update(actor, id, "assign_service_request", |request| {
            Ok(request.assign(provider_id, estimated_cost, now)?)
        })
        .await
    }

    /// Cancel an in-progress request.
    pub async fn cancel(
        &self,
        actor: &User,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(ServiceRequest, Transition), RepositoryError> {
        self.update(actor, id, "cancel_service_request", |request| {
            Ok(request.cancel(now)?)
        })
        .await
    }

    /// Append a note.
    pub async fn add_note(
        &self,
        actor: &User,
        id: Uuid,
        note: String,
        now: DateTime<Utc>,
    ) -> Result<ServiceRequest, RepositoryError> {
        let (request, ()) = self
            .update(actor, id, "add_service_request_note", |request| {
                request.add_note(note, now);
                Ok(())
            })
            .await?;
        Ok(request)
    }

    /// Runs `apply` on a copy of a request visible to `actor` and stores the
    /// copy if it succeeds.
    async fn update<T>(
        &self,
        actor: &User,
        id: Uuid,
        operation: &'static str,
        apply: impl FnOnce(&mut ServiceRequest) -> Result<T, RepositoryError>,
    ) -> Result<(ServiceRequest, T), RepositoryError> {
        let timer = QueryTimer::new(operation);
        let mut data = self.store.write().await;

        let index = data
            .service_requests
            .iter()
            .position(|r| r.id == id && is_visible(&data, actor, r));

        let result = match index {
            None => Err(RepositoryError::not_found(ENTITY, id)),
            Some(i) => {
                let mut updated = data.service_requests[i].clone();
                apply(&mut updated).map(|out| {
                    data.service_requests[i] = updated.clone();
                    (updated, out)
                })
            }
        };
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ids;
    use crate::repositories::UserRepository;
    use domain::models::{Priority, ServiceRequestError, ServiceRequestStatus};

    async fn setup() -> (Store, ServiceRequestRepository, UserRepository) {
        let store = Store::seeded(Utc::now());
        (
            store.clone(),
            ServiceRequestRepository::new(store.clone()),
            UserRepository::new(store),
        )
    }

    #[tokio::test]
    async fn test_visibility_by_role() {
        let (_, repo, users) = setup().await;
        let all = ListServiceRequestsQuery::default();

        let manager = users.find_by_id(ids::MANAGER).await.unwrap();
        assert_eq!(repo.list_visible(&manager, &all).await.len(), 6);

        let tenant = users.find_by_id(ids::TENANT).await.unwrap();
        let mine = repo.list_visible(&tenant, &all).await;
        assert_eq!(mine.len(), 4);
        assert!(mine.iter().all(|r| r.tenant_id == ids::TENANT));

        let provider = users.find_by_id(ids::PROVIDER).await.unwrap();
        let assigned = repo.list_visible(&provider, &all).await;
        assert_eq!(assigned.len(), 3);

        let new_manager = users.find_by_id(ids::NEW_MANAGER).await.unwrap();
        assert!(repo.list_visible(&new_manager, &all).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let (_, repo, users) = setup().await;
        let manager = users.find_by_id(ids::MANAGER).await.unwrap();
        let in_progress = ListServiceRequestsQuery {
            status: Some(ServiceRequestStatus::InProgress),
            priority: None,
        };
        let result = repo.list_visible(&manager, &in_progress).await;
        assert_eq!(result.len(), 2);

        let all = repo
            .list_visible(&manager, &ListServiceRequestsQuery::default())
            .await;
        assert_eq!(all[0].id, ids::LEAKY_FAUCET);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_find_visible_resolves_references() {
        let (_, repo, users) = setup().await;
        let manager = users.find_by_id(ids::MANAGER).await.unwrap();
        let record = repo.find_visible(&manager, ids::WATER_HEATER).await.unwrap();
        assert_eq!(record.property.unwrap().name, "Oak Street Townhomes");
        assert_eq!(record.tenant.unwrap().name, "James Carter");
        assert_eq!(record.provider.unwrap().company, "Torres Plumbing");

        let other_tenant = users.find_by_id(ids::TENANT).await.unwrap();
        assert!(repo.find_visible(&other_tenant, ids::WATER_HEATER).await.is_none());
    }

    #[tokio::test]
    async fn test_accept_is_persisted() {
        let (_, repo, users) = setup().await;
        let provider = users.find_by_id(ids::PROVIDER).await.unwrap();
        let now = Utc::now();

        let (updated, transition) = repo
            .apply_action(&provider, ids::WATER_HEATER, ActionKind::Accept, None, now)
            .await
            .unwrap();
        assert_eq!(transition.to, ServiceRequestStatus::InProgress);
        assert_eq!(updated.updated_at, now);

        let stored = repo.find_by_id(ids::WATER_HEATER).await.unwrap();
        assert_eq!(stored.status, ServiceRequestStatus::InProgress);
    }

    #[tokio::test]
    async fn test_complete_records_cost() {
        let (_, repo, users) = setup().await;
        let provider = users.find_by_id(ids::PROVIDER).await.unwrap();
        repo.apply_action(
            &provider,
            ids::CLOGGED_DRAIN,
            ActionKind::Complete,
            Some(Decimal::new(17550, 2)),
            Utc::now(),
        )
        .await
        .unwrap();

        let stored = repo.find_by_id(ids::CLOGGED_DRAIN).await.unwrap();
        assert_eq!(stored.status, ServiceRequestStatus::Completed);
        assert_eq!(stored.actual_cost, Some(Decimal::new(17550, 2)));
        assert!(stored.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_rejected_action_leaves_store_unchanged() {
        let (_, repo, users) = setup().await;
        let provider = users.find_by_id(ids::PROVIDER).await.unwrap();
        let before = repo.find_by_id(ids::WATER_HEATER).await.unwrap();

        let err = repo
            .apply_action(&provider, ids::WATER_HEATER, ActionKind::Complete, None, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Lifecycle(ServiceRequestError::ActionNotAvailable { .. })
        ));
        assert_eq!(repo.find_by_id(ids::WATER_HEATER).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_action_on_unassigned_request_is_not_found() {
        let (_, repo, users) = setup().await;
        let other = users.find_by_id(ids::PROVIDER_ELECTRIC).await.unwrap();
        let err = repo
            .apply_action(&other, ids::WATER_HEATER, ActionKind::Accept, None, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_decline_unassigns() {
        let (_, repo, users) = setup().await;
        let provider = users.find_by_id(ids::PROVIDER).await.unwrap();
        repo.apply_action(&provider, ids::WATER_HEATER, ActionKind::Decline, None, Utc::now())
            .await
            .unwrap();
        let stored = repo.find_by_id(ids::WATER_HEATER).await.unwrap();
        assert_eq!(stored.status, ServiceRequestStatus::Pending);
        assert!(stored.assigned_provider_id.is_none());
        assert!(repo.find_visible(&provider, ids::WATER_HEATER).await.is_none());
    }

    #[tokio::test]
    async fn test_assign_requires_known_provider() {
        let (_, repo, users) = setup().await;
        let manager = users.find_by_id(ids::MANAGER).await.unwrap();
        let err = repo
            .assign(&manager, ids::LEAKY_FAUCET, Uuid::new_v4(), None, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::NotFound {
                entity: "Service provider",
                ..
            }
        ));

        let (updated, _) = repo
            .assign(
                &manager,
                ids::LEAKY_FAUCET,
                ids::PROVIDER,
                Some(Decimal::from(90)),
                Utc::now(),
            )
            .await
            .unwrap();
        assert_eq!(updated.assigned_provider_id, Some(ids::PROVIDER));
        assert_eq!(updated.status, ServiceRequestStatus::Assigned);
    }

    #[tokio::test]
    async fn test_cancel_and_notes() {
        let (_, repo, users) = setup().await;
        let manager = users.find_by_id(ids::MANAGER).await.unwrap();
        let (cancelled, _) = repo
            .cancel(&manager, ids::SPARKING_OUTLET, Utc::now())
            .await
            .unwrap();
        assert_eq!(cancelled.status, ServiceRequestStatus::Cancelled);

        let noted = repo
            .add_note(&manager, ids::SPARKING_OUTLET, "Tenant moved out".to_string(), Utc::now())
            .await
            .unwrap();
        assert_eq!(noted.notes.last().map(String::as_str), Some("Tenant moved out"));
        assert_eq!(noted.notes.len(), 2);
    }

    #[tokio::test]
    async fn test_create_and_list_for_property() {
        let (_, repo, _) = setup().await;
        let req = ServiceRequest::submit(
            ids::TENANT,
            ids::SUNSET_APARTMENTS,
            "Door lock sticks".to_string(),
            String::new(),
            Priority::Low,
            Utc::now(),
        );
        repo.create(req.clone()).await;
        let listed = repo.list_for_property(ids::SUNSET_APARTMENTS).await;
        assert_eq!(listed[0].id, req.id);
        assert_eq!(listed.len(), 5);
    }
}
