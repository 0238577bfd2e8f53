//! Tenant document repository.

use uuid::Uuid;

use domain::models::Document;

use crate::metrics::QueryTimer;
use crate::store::Store;

#[derive(Clone)]
pub struct DocumentRepository {
    store: Store,
}

impl DocumentRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Documents belonging to a tenant, newest upload first.
    pub async fn list_for_tenant(&self, tenant_id: Uuid) -> Vec<Document> {
        let timer = QueryTimer::new("list_documents_for_tenant");
        let data = self.store.read().await;
        let mut result: Vec<Document> = data
            .documents
            .iter()
            .filter(|d| d.tenant_id == tenant_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        timer.record();
        result
    }
}
