use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::DispatchResult;
use crate::model::entity::audit_log::AuditAction;
use crate::model::entity::{AuditLogEntry, Ticket};

#[async_trait]
pub trait AuditService: Send + Sync {
    /// Append one entry for an administrative mutation. Rejects blank
    /// reasons before writing anything.
    async fn record(
        &self,
        actor_id: Uuid,
        action: AuditAction,
        previous: &Ticket,
        current: &Ticket,
        reason: &str,
    ) -> DispatchResult<AuditLogEntry>;

    /// Re-apply an entry's previous snapshot as a new audited mutation
    /// tagged `Rollback`.
    async fn rollback(&self, entry_id: Uuid, admin_id: Uuid, reason: String)
        -> DispatchResult<Ticket>;

    /// A ticket's entries, newest first.
    async fn history(&self, ticket_id: Uuid) -> DispatchResult<Vec<AuditLogEntry>>;
}
