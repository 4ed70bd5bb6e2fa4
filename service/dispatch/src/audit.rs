use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_dispatch::{
    exception::{DispatchException, DispatchResult},
    model::{
        entity::{audit_log::AuditAction, AuditLogEntry, Ticket},
        vo::msg::{
            self, AuditChangeInfo, ChangeMsg, Info, TicketChangeInfo, TicketChangeKind,
        },
    },
    repository::{AuditLogRepo, TicketRepo},
    service::{AuditService, EventPublisher, NotificationService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AuditServiceImpl {
    audit_repo: Arc<dyn AuditLogRepo>,
    ticket_repo: Arc<dyn TicketRepo>,
    notifier: Arc<dyn NotificationService>,
    status_publisher: Arc<dyn EventPublisher<ChangeMsg>>,
}

#[async_trait]
impl AuditService for AuditServiceImpl {
    async fn record(
        &self,
        actor_id: Uuid,
        action: AuditAction,
        previous: &Ticket,
        current: &Ticket,
        reason: &str,
    ) -> DispatchResult<AuditLogEntry> {
        DispatchException::require_reason(reason)?;
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            ticket_id: current.id,
            actor_id,
            action,
            previous: previous.clone(),
            current: current.clone(),
            reason: reason.trim().to_owned(),
            created_at: Utc::now(),
        };
        self.audit_repo.append(&entry).await?;

        let event = ChangeMsg {
            id: entry.ticket_id,
            info: Info::Audit(AuditChangeInfo {
                entry_id: entry.id,
                action: entry.action,
            }),
        };
        if let Err(e) =
            self.status_publisher.publish(&event, &msg::ticket_topic(entry.ticket_id)).await
        {
            tracing::warn!(ticket_id = %entry.ticket_id, "Failed to publish audit event: {e}");
        }
        Ok(entry)
    }

    async fn rollback(
        &self,
        entry_id: Uuid,
        admin_id: Uuid,
        reason: String,
    ) -> DispatchResult<Ticket> {
        DispatchException::require_reason(&reason)?;
        let entry = self
            .audit_repo
            .get_by_id(entry_id)
            .await?
            .ok_or(DispatchException::NoSuchAuditEntry { id: entry_id })?;
        if !entry.action.is_rollback_eligible() {
            return Err(DispatchException::NotRollbackable { id: entry_id });
        }
        // A deleted ticket has nothing left to restore onto.
        let before = self
            .ticket_repo
            .get_by_id(entry.ticket_id)
            .await?
            .ok_or(DispatchException::NoSuchTicket { id: entry.ticket_id })?;

        // The rollback's own "previous" half is whatever the ticket looks
        // like right now, not the original entry's.
        let restored = entry.previous.clone();
        self.ticket_repo.update(&restored).await?;
        self.record(admin_id, AuditAction::Rollback, &before, &restored, &reason).await?;
        tracing::info!(
            ticket_id = %restored.id,
            entry_id = %entry_id,
            admin_id = %admin_id,
            "Audit entry rolled back"
        );

        if let Err(e) =
            self.notifier.on_ticket_change(&restored, TicketChangeKind::RolledBack).await
        {
            tracing::warn!(ticket_id = %restored.id, "Failed to dispatch notifications: {e}");
        }
        let event = ChangeMsg {
            id: restored.id,
            info: Info::Ticket(TicketChangeInfo {
                change: TicketChangeKind::RolledBack,
                status: restored.status,
                technician_id: restored.technician_id,
                priority: restored.priority,
                paused: restored.paused,
            }),
        };
        if let Err(e) =
            self.status_publisher.publish(&event, &msg::ticket_topic(restored.id)).await
        {
            tracing::warn!(ticket_id = %restored.id, "Failed to publish ticket event: {e}");
        }
        Ok(restored)
    }

    async fn history(&self, ticket_id: Uuid) -> DispatchResult<Vec<AuditLogEntry>> {
        Ok(self.audit_repo.list_by_ticket(ticket_id).await?)
    }
}
