//! Service provider domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contractor who works service requests. `id` is the provider's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceProvider {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}
