use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Ticket;

/// Ticket storage with per-record atomic read-modify-write semantics.
#[async_trait]
pub trait TicketRepo: Send + Sync {
    async fn insert(&self, ticket: &Ticket) -> anyhow::Result<()>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>>;

    /// Atomic per-ticket replace. Of two concurrent writers the later one
    /// wins; the store must never interleave field-level halves.
    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;

    /// Physical removal. Returns false when the ticket was already gone.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Set the technician reference only while none is set. Returns false
    /// when another writer got there first.
    async fn assign_if_unassigned(&self, id: Uuid, technician_id: Uuid) -> anyhow::Result<bool>;

    /// Clear the technician reference on all of the technician's
    /// non-terminal tickets, returning the affected tickets.
    async fn clear_assignments(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>>;

    /// Pending tickets with no technician reference, the auto-assign pool.
    async fn list_unassigned_pending(&self) -> anyhow::Result<Vec<Ticket>>;
}
