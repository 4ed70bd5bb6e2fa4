use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::entity::{
        technician::TechnicianRole, user::ActorRole, AuditLogEntry, Notification, SystemSettings,
        Technician, Ticket, User,
    },
    repository::{
        AuditLogRepo, NotificationRepo, SettingsRepo, TechnicianRepo, TicketRepo, UserRepo,
    },
    service::EventPublisher,
};

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn insert(&self, ticket: &Ticket) -> anyhow::Result<()>;
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>>;
        async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;
        async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn assign_if_unassigned(&self, id: Uuid, technician_id: Uuid) -> anyhow::Result<bool>;
        async fn clear_assignments(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>>;
        async fn list_unassigned_pending(&self) -> anyhow::Result<Vec<Ticket>>;
    }
}

mock! {
    pub TechnicianRepo {}
    #[async_trait]
    impl TechnicianRepo for TechnicianRepo {
        async fn insert(&self, technician: &Technician) -> anyhow::Result<()>;
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>>;
        async fn update(&self, technician: &Technician) -> anyhow::Result<()>;
        async fn acquire_round_robin(
            &self,
            role: TechnicianRole,
            now: DateTime<Utc>,
        ) -> anyhow::Result<Option<Technician>>;
        async fn stamp_assignment(&self, id: Uuid, now: DateTime<Utc>) -> anyhow::Result<()>;
    }
}

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn insert(&self, user: &User) -> anyhow::Result<()>;
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
        async fn list_ids_by_role(&self, role: ActorRole) -> anyhow::Result<Vec<Uuid>>;
    }
}

mock! {
    pub AuditLogRepo {}
    #[async_trait]
    impl AuditLogRepo for AuditLogRepo {
        async fn append(&self, entry: &AuditLogEntry) -> anyhow::Result<()>;
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<AuditLogEntry>>;
        async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<AuditLogEntry>>;
    }
}

mock! {
    pub SettingsRepo {}
    #[async_trait]
    impl SettingsRepo for SettingsRepo {
        async fn get(&self) -> anyhow::Result<SystemSettings>;
        async fn set_auto_assign(&self, enabled: bool) -> anyhow::Result<SystemSettings>;
    }
}

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn insert(&self, notification: &Notification) -> anyhow::Result<bool>;
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Notification>>;
        async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;
        async fn mark_read(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<usize>;
        async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn delete_all(&self, user_id: Uuid) -> anyhow::Result<usize>;
    }
}

mock! {
    pub EventPublisher<T: Send + Sync + 'static> {}
    #[async_trait]
    impl<T: Send + Sync + 'static> EventPublisher<T> for EventPublisher<T> {
        async fn publish(&self, msg: &T, topic: &str) -> anyhow::Result<()>;
    }
}
