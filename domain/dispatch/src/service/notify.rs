use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::DispatchResult;
use crate::model::entity::user::ActorRole;
use crate::model::entity::{Notification, Ticket};
use crate::model::vo::msg::TicketChangeKind;

/// Fans lifecycle and assignment events out as durable notification
/// records plus live pushes. Read and delete operations are idempotent.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Build and deliver the notifications a ticket change warrants.
    async fn on_ticket_change(
        &self,
        ticket: &Ticket,
        change: TicketChangeKind,
    ) -> DispatchResult<Vec<Notification>>;

    /// Administrator-authored message to every current member of a role;
    /// returns the recipient count.
    async fn broadcast(
        &self,
        sender_id: Uuid,
        title: &str,
        message: &str,
        target: ActorRole,
    ) -> DispatchResult<usize>;

    async fn list_for_user(&self, user_id: Uuid) -> DispatchResult<Vec<Notification>>;

    async fn mark_read(&self, id: Uuid) -> DispatchResult<()>;

    async fn mark_all_read(&self, user_id: Uuid) -> DispatchResult<usize>;

    async fn delete(&self, id: Uuid) -> DispatchResult<()>;

    async fn delete_all(&self, user_id: Uuid) -> DispatchResult<usize>;
}
