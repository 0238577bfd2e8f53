//! Service request domain models and lifecycle.
//!
//! A service request moves `pending -> assigned -> in_progress -> {completed, cancelled}`.
//! A provider may decline an assignment, which returns the request to `pending`.
//! The actions shown to a provider for each status come from
//! [`ServiceRequestStatus::available_actions`], and applying one mutates the record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use super::user::UserRole;

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRequestStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceRequestStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ServiceRequestStatus; 5] = [
        ServiceRequestStatus::Pending,
        ServiceRequestStatus::Assigned,
        ServiceRequestStatus::InProgress,
        ServiceRequestStatus::Completed,
        ServiceRequestStatus::Cancelled,
    ];

    /// Actions that may be requested from this status.
    pub fn available_actions(self) -> &'static [RequestAction] {
        match self {
            ServiceRequestStatus::Pending => &[],
            ServiceRequestStatus::Assigned => &[ACCEPT, DECLINE],
            ServiceRequestStatus::InProgress => &[COMPLETE],
            ServiceRequestStatus::Completed | ServiceRequestStatus::Cancelled => &[],
        }
    }

    /// Whether `next` is a legal successor of this status.
    pub fn can_transition_to(self, next: ServiceRequestStatus) -> bool {
        use ServiceRequestStatus::*;
        matches!(
            (self, next),
            (Pending, Assigned)
                | (Assigned, InProgress)
                | (Assigned, Pending)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }

    /// Still waiting on someone to act.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            ServiceRequestStatus::Pending
                | ServiceRequestStatus::Assigned
                | ServiceRequestStatus::InProgress
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceRequestStatus::Pending => "Pending",
            ServiceRequestStatus::Assigned => "Assigned",
            ServiceRequestStatus::InProgress => "In Progress",
            ServiceRequestStatus::Completed => "Completed",
            ServiceRequestStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ServiceRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceRequestStatus::Pending => write!(f, "pending"),
            ServiceRequestStatus::Assigned => write!(f, "assigned"),
            ServiceRequestStatus::InProgress => write!(f, "in_progress"),
            ServiceRequestStatus::Completed => write!(f, "completed"),
            ServiceRequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Urgency of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Emergency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Emergency => "Emergency",
        }
    }

    /// Badge colour used when rendering the priority.
    pub fn badge_color(self) -> &'static str {
        match self {
            Priority::Low => "gray",
            Priority::Medium => "blue",
            Priority::High => "orange",
            Priority::Emergency => "red",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Emergency => write!(f, "emergency"),
        }
    }
}

/// Action a provider can take on a request from the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Accept,
    Decline,
    Complete,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Accept => write!(f, "accept"),
            ActionKind::Decline => write!(f, "decline"),
            ActionKind::Complete => write!(f, "complete"),
        }
    }
}

/// A (label, target status) pair offered for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RequestAction {
    pub action: ActionKind,
    pub label: &'static str,
    pub target: ServiceRequestStatus,
}

const ACCEPT: RequestAction = RequestAction {
    action: ActionKind::Accept,
    label: "Accept",
    target: ServiceRequestStatus::InProgress,
};

const DECLINE: RequestAction = RequestAction {
    action: ActionKind::Decline,
    label: "Decline",
    target: ServiceRequestStatus::Pending,
};

const COMPLETE: RequestAction = RequestAction {
    action: ActionKind::Complete,
    label: "Mark Complete",
    target: ServiceRequestStatus::Completed,
};

/// Actions a viewer in `role` is offered for a request in `status`.
///
/// Only service providers act on requests from the detail panel.
pub fn actions_for_role(role: UserRole, status: ServiceRequestStatus) -> &'static [RequestAction] {
    match role {
        UserRole::ServiceProvider => status.available_actions(),
        UserRole::PropertyManager | UserRole::Tenant => &[],
    }
}

/// Errors raised by lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceRequestError {
    #[error("Action '{action}' is not available while the request is {status}")]
    ActionNotAvailable {
        action: ActionKind,
        status: ServiceRequestStatus,
    },

    #[error("Cannot move request from {from} to {to}")]
    InvalidTransition {
        from: ServiceRequestStatus,
        to: ServiceRequestStatus,
    },
}

/// A status change that was applied to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Transition {
    pub from: ServiceRequestStatus,
    pub to: ServiceRequestStatus,
}

/// A maintenance ticket raised against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: ServiceRequestStatus,
    pub priority: Priority,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub assigned_provider_id: Option<Uuid>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    #[serde(default)]
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ServiceRequest {
    /// Opens a new pending request on behalf of a tenant.
    pub fn submit(
        tenant_id: Uuid,
        property_id: Uuid,
        title: String,
        description: String,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: ServiceRequestStatus::Pending,
            priority,
            property_id,
            tenant_id,
            assigned_provider_id: None,
            estimated_cost: None,
            actual_cost: None,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Applies a provider action if the current status offers it.
    pub fn apply_action(
        &mut self,
        action: ActionKind,
        now: DateTime<Utc>,
    ) -> Result<Transition, ServiceRequestError> {
        let offered = self
            .status
            .available_actions()
            .iter()
            .find(|a| a.action == action)
            .ok_or(ServiceRequestError::ActionNotAvailable {
                action,
                status: self.status,
            })?;

        let transition = self.move_to(offered.target, now)?;
        match action {
            ActionKind::Decline => self.assigned_provider_id = None,
            ActionKind::Complete => self.completed_at = Some(now),
            ActionKind::Accept => {}
        }
        Ok(transition)
    }

    /// Assigns a provider to a pending request.
    pub fn assign(
        &mut self,
        provider_id: Uuid,
        estimated_cost: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> Result<Transition, ServiceRequestError> {
        let transition = self.move_to(ServiceRequestStatus::Assigned, now)?;
        self.assigned_provider_id = Some(provider_id);
        if estimated_cost.is_some() {
            self.estimated_cost = estimated_cost;
        }
        Ok(transition)
    }

    /// Cancels a request that is in progress.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<Transition, ServiceRequestError> {
        self.move_to(ServiceRequestStatus::Cancelled, now)
    }

    /// Appends a note. Notes are never edited or removed.
    pub fn add_note(&mut self, note: String, now: DateTime<Utc>) {
        self.notes.push(note);
        self.updated_at = now;
    }

    fn move_to(
        &mut self,
        to: ServiceRequestStatus,
        now: DateTime<Utc>,
    ) -> Result<Transition, ServiceRequestError> {
        let from = self.status;
        if !from.can_transition_to(to) {
            return Err(ServiceRequestError::InvalidTransition { from, to });
        }
        self.status = to;
        self.updated_at = now;
        Ok(Transition { from, to })
    }
}

/// Request to submit a new service request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateServiceRequestRequest {
    #[validate(
        length(min = 1, max = 120, message = "Title must be 1-120 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(default)]
    pub description: String,

    #[serde(default = "default_priority")]
    pub priority: Priority,
}

fn default_priority() -> Priority {
    Priority::Medium
}

/// Request to append a note.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddNoteRequest {
    #[validate(custom(function = "shared::validation::validate_note"))]
    pub note: String,
}

/// Request to apply a provider action.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ApplyActionRequest {
    pub action: ActionKind,

    /// Final cost, recorded when completing.
    #[validate(custom(function = "shared::validation::validate_non_negative_amount"))]
    #[serde(default)]
    pub actual_cost: Option<Decimal>,
}

/// Request to assign a provider.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AssignProviderRequest {
    pub provider_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_non_negative_amount"))]
    #[serde(default)]
    pub estimated_cost: Option<Decimal>,
}

/// Response after a status change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TransitionResponse {
    pub id: Uuid,
    pub from: ServiceRequestStatus,
    pub status: ServiceRequestStatus,
    pub updated_at: DateTime<Utc>,
    pub actions: Vec<RequestAction>,
}

/// Query parameters for listing service requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListServiceRequestsQuery {
    #[serde(default)]
    pub status: Option<ServiceRequestStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ListServiceRequestsQuery {
    pub fn matches(&self, request: &ServiceRequest) -> bool {
        self.status.map_or(true, |s| request.status == s)
            && self.priority.map_or(true, |p| request.priority == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn request_in(status: ServiceRequestStatus) -> ServiceRequest {
        let mut req = ServiceRequest::submit(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Leaking sink".to_string(),
            "Kitchen sink drips".to_string(),
            Priority::High,
            now() - chrono::Duration::days(2),
        );
        req.status = status;
        if status != ServiceRequestStatus::Pending {
            req.assigned_provider_id = Some(Uuid::new_v4());
        }
        req
    }

    fn targets(status: ServiceRequestStatus) -> Vec<(ActionKind, ServiceRequestStatus)> {
        status
            .available_actions()
            .iter()
            .map(|a| (a.action, a.target))
            .collect()
    }

    #[test]
    fn test_assigned_offers_accept_and_decline() {
        assert_eq!(
            targets(ServiceRequestStatus::Assigned),
            vec![
                (ActionKind::Accept, ServiceRequestStatus::InProgress),
                (ActionKind::Decline, ServiceRequestStatus::Pending),
            ]
        );
    }

    #[test]
    fn test_in_progress_offers_complete_only() {
        assert_eq!(
            targets(ServiceRequestStatus::InProgress),
            vec![(ActionKind::Complete, ServiceRequestStatus::Completed)]
        );
    }

    #[test]
    fn test_other_statuses_offer_nothing() {
        for status in [
            ServiceRequestStatus::Pending,
            ServiceRequestStatus::Completed,
            ServiceRequestStatus::Cancelled,
        ] {
            assert!(status.available_actions().is_empty(), "{status}");
        }
    }

    #[test]
    fn test_every_offered_action_is_a_legal_transition() {
        for status in ServiceRequestStatus::ALL {
            for action in status.available_actions() {
                assert!(status.can_transition_to(action.target));
            }
        }
    }

    #[test]
    fn test_action_labels() {
        let labels: Vec<_> = ServiceRequestStatus::Assigned
            .available_actions()
            .iter()
            .map(|a| a.label)
            .collect();
        assert_eq!(labels, vec!["Accept", "Decline"]);
        assert_eq!(
            ServiceRequestStatus::InProgress.available_actions()[0].label,
            "Mark Complete"
        );
    }

    #[test]
    fn test_actions_only_for_providers() {
        let status = ServiceRequestStatus::Assigned;
        assert_eq!(actions_for_role(UserRole::ServiceProvider, status).len(), 2);
        assert!(actions_for_role(UserRole::PropertyManager, status).is_empty());
        assert!(actions_for_role(UserRole::Tenant, status).is_empty());
    }

    #[test]
    fn test_accept_moves_to_in_progress() {
        let mut req = request_in(ServiceRequestStatus::Assigned);
        let provider = req.assigned_provider_id;
        let t = req.apply_action(ActionKind::Accept, now()).unwrap();
        assert_eq!(t.from, ServiceRequestStatus::Assigned);
        assert_eq!(t.to, ServiceRequestStatus::InProgress);
        assert_eq!(req.status, ServiceRequestStatus::InProgress);
        assert_eq!(req.assigned_provider_id, provider);
        assert_eq!(req.updated_at, now());
    }

    #[test]
    fn test_decline_returns_to_pending_and_unassigns() {
        let mut req = request_in(ServiceRequestStatus::Assigned);
        req.apply_action(ActionKind::Decline, now()).unwrap();
        assert_eq!(req.status, ServiceRequestStatus::Pending);
        assert!(req.assigned_provider_id.is_none());
    }

    #[test]
    fn test_complete_sets_completed_at() {
        let mut req = request_in(ServiceRequestStatus::InProgress);
        req.apply_action(ActionKind::Complete, now()).unwrap();
        assert_eq!(req.status, ServiceRequestStatus::Completed);
        assert_eq!(req.completed_at, Some(now()));
    }

    #[test]
    fn test_unavailable_action_leaves_request_unchanged() {
        let mut req = request_in(ServiceRequestStatus::Pending);
        let before = req.clone();
        let err = req.apply_action(ActionKind::Accept, now()).unwrap_err();
        assert_eq!(
            err,
            ServiceRequestError::ActionNotAvailable {
                action: ActionKind::Accept,
                status: ServiceRequestStatus::Pending,
            }
        );
        assert_eq!(req, before);
    }

    #[test]
    fn test_complete_not_available_when_assigned() {
        let mut req = request_in(ServiceRequestStatus::Assigned);
        assert!(req.apply_action(ActionKind::Complete, now()).is_err());
        assert_eq!(req.status, ServiceRequestStatus::Assigned);
    }

    #[test]
    fn test_assign_from_pending() {
        let mut req = request_in(ServiceRequestStatus::Pending);
        let provider = Uuid::new_v4();
        req.assign(provider, Some(Decimal::from(150)), now()).unwrap();
        assert_eq!(req.status, ServiceRequestStatus::Assigned);
        assert_eq!(req.assigned_provider_id, Some(provider));
        assert_eq!(req.estimated_cost, Some(Decimal::from(150)));
    }

    #[test]
    fn test_assign_rejected_when_not_pending() {
        let mut req = request_in(ServiceRequestStatus::InProgress);
        let err = req.assign(Uuid::new_v4(), None, now()).unwrap_err();
        assert_eq!(
            err,
            ServiceRequestError::InvalidTransition {
                from: ServiceRequestStatus::InProgress,
                to: ServiceRequestStatus::Assigned,
            }
        );
    }

    #[test]
    fn test_cancel_only_from_in_progress() {
        let mut req = request_in(ServiceRequestStatus::InProgress);
        assert!(req.cancel(now()).is_ok());
        assert_eq!(req.status, ServiceRequestStatus::Cancelled);
        assert!(req.cancel(now()).is_err());

        let mut pending = request_in(ServiceRequestStatus::Pending);
        assert!(pending.cancel(now()).is_err());
    }

    #[test]
    fn test_terminal_statuses_have_no_successors() {
        for next in ServiceRequestStatus::ALL {
            assert!(!ServiceRequestStatus::Completed.can_transition_to(next));
            assert!(!ServiceRequestStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_add_note_appends() {
        let mut req = request_in(ServiceRequestStatus::Pending);
        req.add_note("First".to_string(), now());
        req.add_note("Second".to_string(), now());
        assert_eq!(req.notes, vec!["First", "Second"]);
        assert_eq!(req.updated_at, now());
    }

    #[test]
    fn test_status_display_and_label() {
        assert_eq!(ServiceRequestStatus::InProgress.to_string(), "in_progress");
        assert_eq!(ServiceRequestStatus::InProgress.label(), "In Progress");
        assert!(ServiceRequestStatus::Assigned.is_open());
        assert!(!ServiceRequestStatus::Cancelled.is_open());
    }

    #[test]
    fn test_priority_badge_colors() {
        assert_eq!(Priority::Low.badge_color(), "gray");
        assert_eq!(Priority::Medium.badge_color(), "blue");
        assert_eq!(Priority::High.badge_color(), "orange");
        assert_eq!(Priority::Emergency.badge_color(), "red");
    }

    #[test]
    fn test_create_request_validation() {
        let ok: CreateServiceRequestRequest =
            serde_json::from_str(r#"{"title":"Broken heater"}"#).unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.priority, Priority::Medium);

        let blank: CreateServiceRequestRequest =
            serde_json::from_str(r#"{"title":"   ","priority":"emergency"}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_add_note_validation() {
        let too_long = AddNoteRequest {
            note: "x".repeat(1001),
        };
        assert!(too_long.validate().is_err());
        let empty = AddNoteRequest {
            note: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_apply_action_request_deserialize() {
        let req: ApplyActionRequest =
            serde_json::from_str(r#"{"action":"complete","actual_cost":"120.50"}"#).unwrap();
        assert_eq!(req.action, ActionKind::Complete);
        assert_eq!(req.actual_cost, Some(Decimal::new(12050, 2)));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_list_query_matches() {
        let req = request_in(ServiceRequestStatus::Assigned);
        let any = ListServiceRequestsQuery::default();
        assert!(any.matches(&req));

        let by_status = ListServiceRequestsQuery {
            status: Some(ServiceRequestStatus::Pending),
            priority: None,
        };
        assert!(!by_status.matches(&req));

        let by_priority = ListServiceRequestsQuery {
            status: None,
            priority: Some(Priority::High),
        };
        assert!(by_priority.matches(&req));
    }
}
