//! Demo data set.
//!
//! Ids are fixed so tests and local clients can address records directly.
//! Timestamps are offsets from the `now` passed to [`seed`].

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use domain::models::{
    Document, DocumentKind, Notification, NotificationKind, Priority, Property, ServiceProvider,
    ServiceRequest, ServiceRequestStatus, Tenant, User, UserRole,
};

use crate::store::StoreData;

/// Fixed record ids.
pub mod ids {
    use uuid::Uuid;

    pub const MANAGER: Uuid = Uuid::from_u128(0x1000);
    /// A manager with no properties.
    pub const NEW_MANAGER: Uuid = Uuid::from_u128(0x1001);
    pub const TENANT: Uuid = Uuid::from_u128(0x2000);
    pub const TENANT_OAK: Uuid = Uuid::from_u128(0x2001);
    /// A tenant with no lease, requests or documents.
    pub const NEW_TENANT: Uuid = Uuid::from_u128(0x2002);
    pub const PROVIDER: Uuid = Uuid::from_u128(0x3000);
    pub const PROVIDER_ELECTRIC: Uuid = Uuid::from_u128(0x3001);

    pub const SUNSET_APARTMENTS: Uuid = Uuid::from_u128(0x4000);
    pub const OAK_TOWNHOMES: Uuid = Uuid::from_u128(0x4001);
    pub const HARBOR_CONDOS: Uuid = Uuid::from_u128(0x4002);

    /// Pending, unassigned.
    pub const LEAKY_FAUCET: Uuid = Uuid::from_u128(0x5000);
    /// Assigned to [`PROVIDER`].
    pub const WATER_HEATER: Uuid = Uuid::from_u128(0x5001);
    /// In progress with [`PROVIDER_ELECTRIC`].
    pub const SPARKING_OUTLET: Uuid = Uuid::from_u128(0x5002);
    /// Completed by [`PROVIDER`].
    pub const GARBAGE_DISPOSAL: Uuid = Uuid::from_u128(0x5003);
    /// Cancelled.
    pub const CRACKED_WINDOW: Uuid = Uuid::from_u128(0x5004);
    /// In progress with [`PROVIDER`].
    pub const CLOGGED_DRAIN: Uuid = Uuid::from_u128(0x5005);

    pub const LEASE_DOCUMENT: Uuid = Uuid::from_u128(0x6000);
    pub const RENT_RECEIPT: Uuid = Uuid::from_u128(0x6001);

    pub const MANAGER_NEW_REQUEST_NOTICE: Uuid = Uuid::from_u128(0x7000);
    pub const MANAGER_LEASE_REMINDER: Uuid = Uuid::from_u128(0x7001);
    pub const TENANT_PROGRESS_NOTICE: Uuid = Uuid::from_u128(0x7002);
    pub const PROVIDER_ASSIGNMENT_NOTICE: Uuid = Uuid::from_u128(0x7003);
}

fn user(id: Uuid, name: &str, email: &str, role: UserRole) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

fn property(id: Uuid, name: &str, address: &str, units: u32, occupied: u32, rent: i64) -> Property {
    Property {
        id,
        name: name.to_string(),
        address: address.to_string(),
        units,
        occupied_units: occupied,
        monthly_rent: Decimal::from(rent),
        manager_id: ids::MANAGER,
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: Uuid,
    title: &str,
    description: &str,
    status: ServiceRequestStatus,
    priority: Priority,
    property_id: Uuid,
    tenant_id: Uuid,
    provider_id: Option<Uuid>,
    created_at: DateTime<Utc>,
) -> ServiceRequest {
    ServiceRequest {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        property_id,
        tenant_id,
        assigned_provider_id: provider_id,
        estimated_cost: None,
        actual_cost: None,
        notes: Vec::new(),
        created_at,
        updated_at: created_at,
        completed_at: None,
    }
}

fn notification(
    id: Uuid,
    user_id: Uuid,
    kind: NotificationKind,
    title: &str,
    message: &str,
    read: bool,
    created_at: DateTime<Utc>,
) -> Notification {
    Notification {
        id,
        user_id,
        title: title.to_string(),
        message: message.to_string(),
        kind,
        read,
        created_at,
    }
}

/// Builds the demo data set.
pub fn seed(now: DateTime<Utc>) -> StoreData {
    let users = vec![
        user(ids::MANAGER, "Sarah Johnson", "sarah@propertyhub.test", UserRole::PropertyManager),
        user(ids::NEW_MANAGER, "Alex Kim", "alex@propertyhub.test", UserRole::PropertyManager),
        user(ids::TENANT, "Maria Lopez", "maria@propertyhub.test", UserRole::Tenant),
        user(ids::TENANT_OAK, "James Carter", "james@propertyhub.test", UserRole::Tenant),
        user(ids::NEW_TENANT, "Priya Patel", "priya@propertyhub.test", UserRole::Tenant),
        user(ids::PROVIDER, "Mike Torres", "mike@torresplumbing.test", UserRole::ServiceProvider),
        user(
            ids::PROVIDER_ELECTRIC,
            "Lena Brooks",
            "lena@brightline.test",
            UserRole::ServiceProvider,
        ),
    ];

    let properties = vec![
        property(ids::SUNSET_APARTMENTS, "Sunset Apartments", "1200 Sunset Blvd", 24, 22, 1850),
        property(ids::OAK_TOWNHOMES, "Oak Street Townhomes", "45 Oak St", 8, 7, 2500),
        property(ids::HARBOR_CONDOS, "Harbor View Condos", "300 Harbor Way", 12, 9, 2100),
    ];

    let tenants = vec![
        Tenant {
            id: ids::TENANT,
            name: "Maria Lopez".to_string(),
            email: "maria@propertyhub.test".to_string(),
            phone: Some("555-0142".to_string()),
            property_id: ids::SUNSET_APARTMENTS,
            unit: "2B".to_string(),
            lease_end: now + Duration::days(165),
        },
        Tenant {
            id: ids::TENANT_OAK,
            name: "James Carter".to_string(),
            email: "james@propertyhub.test".to_string(),
            phone: None,
            property_id: ids::OAK_TOWNHOMES,
            unit: "101".to_string(),
            lease_end: now + Duration::days(60),
        },
    ];

    let service_providers = vec![
        ServiceProvider {
            id: ids::PROVIDER,
            name: "Mike Torres".to_string(),
            company: "Torres Plumbing".to_string(),
            specialties: vec!["plumbing".to_string(), "water heaters".to_string()],
            rating: Some(4.8),
        },
        ServiceProvider {
            id: ids::PROVIDER_ELECTRIC,
            name: "Lena Brooks".to_string(),
            company: "Brightline Electric".to_string(),
            specialties: vec!["electrical".to_string()],
            rating: Some(4.6),
        },
    ];

    let leaky_faucet = request(
        ids::LEAKY_FAUCET,
        "Leaky kitchen faucet",
        "The kitchen faucet drips constantly, even when fully closed.",
        ServiceRequestStatus::Pending,
        Priority::Medium,
        ids::SUNSET_APARTMENTS,
        ids::TENANT,
        None,
        now - Duration::hours(2),
    );

    let mut water_heater = request(
        ids::WATER_HEATER,
        "No hot water",
        "Water heater stopped producing hot water this morning.",
        ServiceRequestStatus::Assigned,
        Priority::High,
        ids::OAK_TOWNHOMES,
        ids::TENANT_OAK,
        Some(ids::PROVIDER),
        now - Duration::days(1),
    );
    water_heater.estimated_cost = Some(Decimal::from(450));
    water_heater.updated_at = now - Duration::hours(20);

    let mut sparking_outlet = request(
        ids::SPARKING_OUTLET,
        "Sparking outlet in bedroom",
        "Outlet next to the bed sparks when anything is plugged in.",
        ServiceRequestStatus::InProgress,
        Priority::Emergency,
        ids::SUNSET_APARTMENTS,
        ids::TENANT,
        Some(ids::PROVIDER_ELECTRIC),
        now - Duration::days(3),
    );
    sparking_outlet.estimated_cost = Some(Decimal::from(200));
    sparking_outlet.notes = vec!["Breaker switched off until repair".to_string()];
    sparking_outlet.updated_at = now - Duration::days(2);

    let mut garbage_disposal = request(
        ids::GARBAGE_DISPOSAL,
        "Garbage disposal jammed",
        "Disposal hums but does not spin.",
        ServiceRequestStatus::Completed,
        Priority::Low,
        ids::OAK_TOWNHOMES,
        ids::TENANT_OAK,
        Some(ids::PROVIDER),
        now - Duration::days(10),
    );
    garbage_disposal.estimated_cost = Some(Decimal::from(150));
    garbage_disposal.actual_cost = Some(Decimal::new(13500, 2));
    garbage_disposal.notes = vec![
        "Cleared jam and reset motor".to_string(),
        "Advised tenant on what not to dispose".to_string(),
    ];
    garbage_disposal.completed_at = Some(now - Duration::days(8));
    garbage_disposal.updated_at = now - Duration::days(8);

    let mut cracked_window = request(
        ids::CRACKED_WINDOW,
        "Cracked living room window",
        "Small crack in the lower pane.",
        ServiceRequestStatus::Cancelled,
        Priority::Low,
        ids::SUNSET_APARTMENTS,
        ids::TENANT,
        Some(ids::PROVIDER_ELECTRIC),
        now - Duration::days(20),
    );
    cracked_window.updated_at = now - Duration::days(18);

    let mut clogged_drain = request(
        ids::CLOGGED_DRAIN,
        "Bathroom drain clogged",
        "Shower drains very slowly.",
        ServiceRequestStatus::InProgress,
        Priority::Medium,
        ids::SUNSET_APARTMENTS,
        ids::TENANT,
        Some(ids::PROVIDER),
        now - Duration::days(2),
    );
    clogged_drain.estimated_cost = Some(Decimal::from(180));
    clogged_drain.updated_at = now - Duration::days(1);

    let service_requests = vec![
        leaky_faucet,
        water_heater,
        sparking_outlet,
        garbage_disposal,
        cracked_window,
        clogged_drain,
    ];

    let notifications = vec![
        notification(
            ids::MANAGER_NEW_REQUEST_NOTICE,
            ids::MANAGER,
            NotificationKind::NewServiceRequest,
            "New service request",
            "\"Leaky kitchen faucet\" was submitted for Sunset Apartments",
            false,
            now - Duration::hours(2),
        ),
        notification(
            ids::MANAGER_LEASE_REMINDER,
            ids::MANAGER,
            NotificationKind::Reminder,
            "Lease renewal",
            "James Carter's lease at Oak Street Townhomes ends in 60 days",
            true,
            now - Duration::days(4),
        ),
        notification(
            ids::TENANT_PROGRESS_NOTICE,
            ids::TENANT,
            NotificationKind::ServiceRequestUpdate,
            "Service request updated",
            "\"Bathroom drain clogged\" moved from Assigned to In Progress",
            false,
            now - Duration::days(1),
        ),
        notification(
            ids::PROVIDER_ASSIGNMENT_NOTICE,
            ids::PROVIDER,
            NotificationKind::NewServiceRequest,
            "New work order",
            "You have been assigned \"No hot water\" (High priority)",
            false,
            now - Duration::hours(20),
        ),
    ];

    let documents = vec![
        Document {
            id: ids::LEASE_DOCUMENT,
            tenant_id: ids::TENANT,
            name: "Lease Agreement".to_string(),
            kind: DocumentKind::Lease,
            uploaded_at: now - Duration::days(200),
        },
        Document {
            id: ids::RENT_RECEIPT,
            tenant_id: ids::TENANT,
            name: "Rent Receipt - September".to_string(),
            kind: DocumentKind::Receipt,
            uploaded_at: now - Duration::days(18),
        },
    ];

    StoreData {
        users,
        properties,
        service_requests,
        tenants,
        service_providers,
        notifications,
        documents,
    }
}
