//! Domain models for Property Hub.

pub mod analytics;
pub mod dashboard;
pub mod document;
pub mod notification;
pub mod property;
pub mod service_provider;
pub mod service_request;
pub mod tenant;
pub mod user;
pub mod user_data;

pub use analytics::Analytics;
pub use dashboard::{
    CallToAction, Dashboard, DocumentView, EmptyState, ListPanel, ManagerDashboard,
    NotificationView, PriorityCounters, PropertyDetail, PropertyView, ProviderDashboard,
    ServiceRequestDetail, ServiceRequestView, StatCard, StatusCounters, TenantDashboard,
    TenantView,
};
pub use document::{Document, DocumentKind};
pub use notification::{Notification, NotificationKind};
pub use property::{find_property, Property};
pub use service_provider::ServiceProvider;
pub use service_request::{
    actions_for_role, ActionKind, AddNoteRequest, ApplyActionRequest, AssignProviderRequest,
    CreateServiceRequestRequest, ListServiceRequestsQuery, Priority, RequestAction,
    ServiceRequest, ServiceRequestError, ServiceRequestStatus, Transition, TransitionResponse,
};
pub use tenant::Tenant;
pub use user::{CurrentUserResponse, User, UserRole};
pub use user_data::{ManagerData, ProviderData, TenantData, UserData};
