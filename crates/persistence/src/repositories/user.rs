//! User repository.

use uuid::Uuid;

use domain::models::User;

use crate::metrics::QueryTimer;
use crate::store::Store;

/// Repository for user lookups.
#[derive(Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        let timer = QueryTimer::new("find_user_by_id");
        let data = self.store.read().await;
        let result = data.users.iter().find(|u| u.id == id).cloned();
        timer.record();
        result
    }

    /// List all users.
    pub async fn list(&self) -> Vec<User> {
        let timer = QueryTimer::new("list_users");
        let result = self.store.read().await.users.clone();
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ids;
    use chrono::Utc;
    use domain::models::UserRole;

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = UserRepository::new(Store::seeded(Utc::now()));
        let user = repo.find_by_id(ids::MANAGER).await.unwrap();
        assert_eq!(user.name, "Sarah Johnson");
        assert_eq!(user.role, UserRole::PropertyManager);
        assert!(repo.find_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_list() {
        let repo = UserRepository::new(Store::seeded(Utc::now()));
        assert_eq!(repo.list().await.len(), 7);
    }
}
