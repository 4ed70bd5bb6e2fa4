use async_trait::async_trait;
use domain_dispatch::model::entity::AuditLogEntry;
use domain_dispatch::repository::AuditLogRepo;
use uuid::Uuid;

use crate::store::MemoryStore;

#[async_trait]
impl AuditLogRepo for MemoryStore {
    async fn append(&self, entry: &AuditLogEntry) -> anyhow::Result<()> {
        self.audit_log.write().await.push(entry.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<AuditLogEntry>> {
        Ok(self.audit_log.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<AuditLogEntry>> {
        // Entries append in order, so newest-first is a reverse scan.
        Ok(self
            .audit_log
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| e.ticket_id == ticket_id)
            .cloned()
            .collect())
    }
}
