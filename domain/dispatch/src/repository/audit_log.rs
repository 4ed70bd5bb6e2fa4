use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::AuditLogEntry;

/// Append-only log; there is deliberately no update or delete.
#[async_trait]
pub trait AuditLogRepo: Send + Sync {
    async fn append(&self, entry: &AuditLogEntry) -> anyhow::Result<()>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<AuditLogEntry>>;

    /// Entries for one ticket, newest first.
    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<AuditLogEntry>>;
}
