//! Tenant document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of document shared with a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Lease,
    Receipt,
    Notice,
    Other,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Lease => write!(f, "lease"),
            DocumentKind::Receipt => write!(f, "receipt"),
            DocumentKind::Notice => write!(f, "notice"),
            DocumentKind::Other => write!(f, "other"),
        }
    }
}

/// A document available to a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Document {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded_at: DateTime<Utc>,
}
