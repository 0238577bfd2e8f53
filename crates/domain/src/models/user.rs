//! User domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user acts in; selects the dashboard and data shape they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    PropertyManager,
    Tenant,
    ServiceProvider,
}

impl UserRole {
    /// Human-readable role name.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::PropertyManager => "Property Manager",
            UserRole::Tenant => "Tenant",
            UserRole::ServiceProvider => "Service Provider",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::PropertyManager => write!(f, "property_manager"),
            UserRole::Tenant => write!(f, "tenant"),
            UserRole::ServiceProvider => write!(f, "service_provider"),
        }
    }
}

/// An application user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Up to two uppercase initials for avatar rendering.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Response body for the current user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub role_label: String,
    pub initials: String,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            role_label: user.role.label().to_string(),
            initials: user.initials(),
        }
    }
}
