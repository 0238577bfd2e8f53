//! Role-specific data context.
//!
//! Each role gets its own field set. Optional members may be absent and list
//! members default to empty when missing from a serialized context.

use serde::{Deserialize, Serialize};

use super::{
    Analytics, Document, Property, ServiceProvider, ServiceRequest, Tenant, User, UserRole,
};

/// Data backing a property manager's views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ManagerData {
    pub user: User,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub service_requests: Vec<ServiceRequest>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub service_providers: Vec<ServiceProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

/// Data backing a tenant's views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantData {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
    #[serde(default)]
    pub service_requests: Vec<ServiceRequest>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Data backing a service provider's views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderData {
    pub user: User,
    /// Open requests assigned to the provider.
    #[serde(default)]
    pub work_orders: Vec<ServiceRequest>,
    #[serde(default)]
    pub completed_jobs: Vec<ServiceRequest>,
    /// Properties referenced by the provider's requests.
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// The current user's data context, one variant per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserData {
    PropertyManager(ManagerData),
    Tenant(TenantData),
    ServiceProvider(ProviderData),
}

impl UserData {
    pub fn user(&self) -> &User {
        match self {
            UserData::PropertyManager(data) => &data.user,
            UserData::Tenant(data) => &data.user,
            UserData::ServiceProvider(data) => &data.user,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            UserData::PropertyManager(_) => UserRole::PropertyManager,
            UserData::Tenant(_) => UserRole::Tenant,
            UserData::ServiceProvider(_) => UserRole::ServiceProvider,
        }
    }

    /// Every service request in the context.
    pub fn service_requests(&self) -> Vec<&ServiceRequest> {
        match self {
            UserData::PropertyManager(data) => data.service_requests.iter().collect(),
            UserData::Tenant(data) => data.service_requests.iter().collect(),
            UserData::ServiceProvider(data) => data
                .work_orders
                .iter()
                .chain(data.completed_jobs.iter())
                .collect(),
        }
    }
}
