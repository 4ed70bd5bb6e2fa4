use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::DispatchResult;
use crate::model::entity::ticket::TicketStatus;
use crate::model::entity::Ticket;
use crate::model::vo::command::{AdminOverrideCommand, CompleteTicketCommand, CreateTicketCommand};

/// Owns ticket status transitions, actor permission checks and transition
/// timestamps.
#[async_trait]
pub trait TicketLifecycleService: Send + Sync {
    /// Create a ticket in `Pending` and attempt automatic assignment.
    async fn create(&self, cmd: CreateTicketCommand) -> DispatchResult<Ticket>;

    /// Technician-driven forward transition. Completion and rejection have
    /// dedicated operations.
    async fn advance(
        &self,
        ticket_id: Uuid,
        actor_id: Uuid,
        target: TicketStatus,
    ) -> DispatchResult<Ticket>;

    /// Geofence-gated completion with remarks and evidence.
    async fn complete(&self, cmd: CompleteTicketCommand) -> DispatchResult<Ticket>;

    /// Technician rejection, with mandatory reason. Ends in `Cancelled`.
    async fn reject(
        &self,
        ticket_id: Uuid,
        actor_id: Uuid,
        reason: String,
        image_urls: Vec<String>,
    ) -> DispatchResult<Ticket>;

    /// Administrative override, audited with a mandatory reason. Returns
    /// `None` when the action deleted the ticket.
    async fn admin_override(&self, cmd: AdminOverrideCommand) -> DispatchResult<Option<Ticket>>;
}
