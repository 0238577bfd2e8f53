//! Current user extractor.
//!
//! Authentication is stubbed: the caller names itself with the `X-User-Id`
//! header and the extractor resolves that id against the user store.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use domain::models::{User, UserRole};
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the current user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user making the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    /// Rejects the request unless the user has `role`.
    pub fn require_role(&self, role: UserRole, action: &str) -> Result<(), ApiError> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "Only a {} can {}",
                role.label().to_lowercase(),
                action
            )))
        }
    }
}

/// Parses the raw header value into a user id.
fn parse_user_id(raw: Option<&str>) -> Result<Uuid, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::Unauthorized("Missing X-User-Id header".to_string()))?;
    Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::Unauthorized("Invalid X-User-Id header".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parse_user_id(
            parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
        )?;

        let user = UserRepository::new(state.store.clone())
            .find_by_id(user_id)
            .await
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Request for unknown user");
                ApiError::Unauthorized("Unknown user".to_string())
            })?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_missing() {
        assert!(matches!(parse_user_id(None), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_parse_user_id_invalid() {
        assert!(matches!(
            parse_user_id(Some("not-a-uuid")),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_parse_user_id_trims() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(Some(&format!(" {id} "))).unwrap(), id);
    }

    #[test]
    fn test_require_role() {
        let user = CurrentUser(User {
            id: Uuid::new_v4(),
            name: "Mike Torres".to_string(),
            email: "mike@example.com".to_string(),
            role: UserRole::ServiceProvider,
        });
        assert!(user.require_role(UserRole::ServiceProvider, "act").is_ok());
        match user.require_role(UserRole::PropertyManager, "assign providers") {
            Err(ApiError::Forbidden(msg)) => {
                assert_eq!(msg, "Only a property manager can assign providers")
            }
            other => panic!("Expected Forbidden, got {other:?}"),
        }
    }
}
