//! Repository implementations over the in-memory store.

pub mod document;
pub mod notification;
pub mod property;
pub mod service_provider;
pub mod service_request;
pub mod tenant;
pub mod user;
pub mod user_data;

pub use document::DocumentRepository;
pub use notification::NotificationRepository;
pub use property::PropertyRepository;
pub use service_provider::ServiceProviderRepository;
pub use service_request::{ServiceRequestRecord, ServiceRequestRepository};
pub use tenant::TenantRepository;
pub use user::UserRepository;
pub use user_data::UserDataRepository;
