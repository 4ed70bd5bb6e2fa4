#![allow(dead_code)]

use std::sync::Arc;

use domain_dispatch::model::entity::technician::{Technician, TechnicianRole};
use domain_dispatch::model::entity::user::{ActorRole, User};
use domain_dispatch::model::vo::command::CreateTicketCommand;
use domain_dispatch::model::vo::GeoPoint;
use domain_dispatch::repository::{TechnicianRepo, UserRepo};
use domain_dispatch::service::{
    AssignmentService, AuditService, NotificationService, TicketLifecycleService,
};
use infrastructure_memory::{InMemoryEventBus, MemoryStore};
use service_dispatch::{
    AssignmentServiceImpl, AuditServiceImpl, NotificationServiceImpl, TicketLifecycleServiceImpl,
};
use uuid::Uuid;

pub const BASE: GeoPoint = GeoPoint {
    lat: 39.9042,
    lng: 116.4074,
};

/// One degree of latitude on the spherical model, in meters.
const METERS_PER_DEGREE_LAT: f64 = 111_194.93;

pub fn point_at_meters_north(origin: GeoPoint, meters: f64) -> GeoPoint {
    GeoPoint {
        lat: origin.lat + meters / METERS_PER_DEGREE_LAT,
        lng: origin.lng,
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub bus: Arc<InMemoryEventBus>,
    pub lifecycle: Arc<dyn TicketLifecycleService>,
    pub assignment: Arc<dyn AssignmentService>,
    pub audit: Arc<dyn AuditService>,
    pub notifier: Arc<dyn NotificationService>,
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let bus = Arc::new(InMemoryEventBus::new());

    let notifier: Arc<dyn NotificationService> = Arc::new(
        NotificationServiceImpl::builder()
            .notification_repo(store.clone())
            .user_repo(store.clone())
            .publisher(bus.clone())
            .build(),
    );
    let audit: Arc<dyn AuditService> = Arc::new(
        AuditServiceImpl::builder()
            .audit_repo(store.clone())
            .ticket_repo(store.clone())
            .notifier(notifier.clone())
            .status_publisher(bus.clone())
            .build(),
    );
    let assignment: Arc<dyn AssignmentService> = Arc::new(
        AssignmentServiceImpl::builder()
            .ticket_repo(store.clone())
            .technician_repo(store.clone())
            .settings_repo(store.clone())
            .notifier(notifier.clone())
            .status_publisher(bus.clone())
            .build(),
    );
    let lifecycle: Arc<dyn TicketLifecycleService> = Arc::new(
        TicketLifecycleServiceImpl::builder()
            .ticket_repo(store.clone())
            .technician_repo(store.clone())
            .user_repo(store.clone())
            .assignment(assignment.clone())
            .audit(audit.clone())
            .notifier(notifier.clone())
            .status_publisher(bus.clone())
            .build(),
    );

    Harness {
        store,
        bus,
        lifecycle,
        assignment,
        audit,
        notifier,
    }
}

pub async fn seed_user(h: &Harness, name: &str, role: ActorRole) -> Uuid {
    let user = User {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        phone: "555-0100".to_owned(),
        role,
        balance: 120.5,
    };
    UserRepo::insert(h.store.as_ref(), &user).await.unwrap();
    user.id
}

pub async fn seed_requester(h: &Harness) -> Uuid {
    seed_user(h, "requester", ActorRole::Requester).await
}

pub async fn seed_admin(h: &Harness) -> Uuid {
    seed_user(h, "admin", ActorRole::Admin).await
}

/// A technician gets both a user row (for notifications and broadcasts)
/// and a roster row, sharing one id.
pub async fn seed_technician(h: &Harness, name: &str, role: TechnicianRole) -> Uuid {
    let id = seed_user(h, name, ActorRole::Technician).await;
    let technician = Technician {
        id,
        name: name.to_owned(),
        role,
        online: true,
        available: true,
        last_assigned_at: None,
    };
    TechnicianRepo::insert(h.store.as_ref(), &technician).await.unwrap();
    id
}

pub fn create_cmd(requester_id: Uuid) -> CreateTicketCommand {
    CreateTicketCommand {
        requester_id,
        kind: Default::default(),
        category: "battery".to_owned(),
        description: "Car will not start".to_owned(),
        location: BASE,
        priority: Default::default(),
        image_urls: vec![],
        voice_urls: vec![],
    }
}
