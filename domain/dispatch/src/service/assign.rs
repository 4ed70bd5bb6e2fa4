use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::DispatchResult;
use crate::model::entity::{SystemSettings, Ticket};

#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Round-robin selection for one pending unassigned ticket. `None`
    /// when auto-assign is disabled, the ticket is no longer eligible, or
    /// no technician qualifies; the ticket then stays in the pool.
    async fn assign_auto(&self, ticket_id: Uuid) -> DispatchResult<Option<Ticket>>;

    /// Auto-assign every unassigned pending ticket; returns how many got a
    /// technician.
    async fn sweep(&self) -> DispatchResult<usize>;

    /// Administrative choice of an arbitrary technician, bypassing the
    /// round-robin filter, allowed in either mode.
    async fn assign_manual(
        &self,
        ticket_id: Uuid,
        technician_id: Uuid,
        admin_id: Uuid,
    ) -> DispatchResult<Ticket>;

    /// Clear all of one technician's non-terminal tickets back into the
    /// unassigned pool; returns the count.
    async fn unassign_all(&self, technician_id: Uuid, admin_id: Uuid) -> DispatchResult<usize>;

    async fn set_auto_assign(&self, admin_id: Uuid, enabled: bool)
        -> DispatchResult<SystemSettings>;
}
