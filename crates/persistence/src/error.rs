//! Repository error type.

use thiserror::Error;
use uuid::Uuid;

use domain::models::ServiceRequestError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error(transparent)]
    Lifecycle(#[from] ServiceRequestError),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        RepositoryError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{ActionKind, ServiceRequestStatus};

    #[test]
    fn test_not_found_display() {
        let id = Uuid::nil();
        assert_eq!(
            RepositoryError::not_found("Service request", id).to_string(),
            "Service request 00000000-0000-0000-0000-000000000000 not found"
        );
    }

    #[test]
    fn test_lifecycle_error_is_transparent() {
        let err: RepositoryError = ServiceRequestError::ActionNotAvailable {
            action: ActionKind::Accept,
            status: ServiceRequestStatus::Completed,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Action 'accept' is not available while the request is completed"
        );
    }
}
