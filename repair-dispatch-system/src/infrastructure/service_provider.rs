use std::sync::Arc;

use domain_dispatch::service::{
    AssignmentService, AuditService, NotificationService, TicketLifecycleService,
};
use infrastructure_memory::{InMemoryEventBus, MemoryStore};
use service_dispatch::{
    AssignmentServiceImpl, AuditServiceImpl, NotificationServiceImpl, TicketLifecycleServiceImpl,
};

/// Hand-wired object graph over the in-memory adapters.
pub struct ServiceProvider {
    pub store: Arc<MemoryStore>,
    pub bus: Arc<InMemoryEventBus>,
    pub lifecycle: Arc<dyn TicketLifecycleService>,
    pub assignment: Arc<dyn AssignmentService>,
    pub audit: Arc<dyn AuditService>,
    pub notifier: Arc<dyn NotificationService>,
}

impl ServiceProvider {
    pub fn build() -> Self {
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

        Self {
            store,
            bus,
            lifecycle,
            assignment,
            audit,
            notifier,
        }
    }
}
