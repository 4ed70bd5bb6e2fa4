use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_dispatch::{
    exception::{DispatchException, DispatchResult},
    model::{
        entity::{ticket::TicketStatus, SystemSettings, Ticket},
        vo::msg::{self, ChangeMsg, Info, TicketChangeInfo, TicketChangeKind},
    },
    repository::{SettingsRepo, TechnicianRepo, TicketRepo},
    service::{AssignmentService, EventPublisher, NotificationService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AssignmentServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    technician_repo: Arc<dyn TechnicianRepo>,
    settings_repo: Arc<dyn SettingsRepo>,
    notifier: Arc<dyn NotificationService>,
    status_publisher: Arc<dyn EventPublisher<ChangeMsg>>,
}

#[async_trait]
impl AssignmentService for AssignmentServiceImpl {
    async fn assign_auto(&self, ticket_id: Uuid) -> DispatchResult<Option<Ticket>> {
        // Fresh read on every attempt; a concurrent toggle must win over
        // any cached view of the flag.
        let settings = self.settings_repo.get().await?;
        if !settings.auto_assign_enabled {
            return Ok(None);
        }

        let mut ticket = self
            .ticket_repo
            .get_by_id(ticket_id)
            .await?
            .ok_or(DispatchException::NoSuchTicket { id: ticket_id })?;
        if ticket.status != TicketStatus::Pending || ticket.technician_id.is_some() {
            return Ok(None);
        }

        let role = ticket.kind.required_role();
        let Some(technician) = self.technician_repo.acquire_round_robin(role, Utc::now()).await?
        else {
            // Nobody eligible right now; the next sweep retries.
            return Ok(None);
        };

        if !self.ticket_repo.assign_if_unassigned(ticket.id, technician.id).await? {
            // Another pass won the ticket; our pick simply rotates back.
            return Ok(None);
        }
        ticket.technician_id = Some(technician.id);
        tracing::info!(
            ticket_id = %ticket.id,
            technician_id = %technician.id,
            "Ticket auto-assigned"
        );
        self.fan_out(&ticket, TicketChangeKind::Assigned).await;
        Ok(Some(ticket))
    }

    async fn sweep(&self) -> DispatchResult<usize> {
        let pool = self.ticket_repo.list_unassigned_pending().await?;
        let mut assigned = 0;
        for ticket in pool {
            match self.assign_auto(ticket.id).await {
                Ok(Some(_)) => assigned += 1,
                Ok(None) => {}
                // One bad ticket must not starve the rest of the pool.
                Err(e) => tracing::warn!(ticket_id = %ticket.id, "Sweep assignment failed: {e}"),
            }
        }
        Ok(assigned)
    }

    async fn assign_manual(
        &self,
        ticket_id: Uuid,
        technician_id: Uuid,
        admin_id: Uuid,
    ) -> DispatchResult<Ticket> {
        let mut ticket = self
            .ticket_repo
            .get_by_id(ticket_id)
            .await?
            .ok_or(DispatchException::NoSuchTicket { id: ticket_id })?;
        if ticket.status.is_terminal() {
            return Err(DispatchException::TerminalTicket {
                id: ticket.id,
                status: ticket.status,
            });
        }
        let technician = self
            .technician_repo
            .get_by_id(technician_id)
            .await?
            .ok_or(DispatchException::NoSuchTechnician { id: technician_id })?;

        ticket.technician_id = Some(technician.id);
        self.ticket_repo.update(&ticket).await?;
        self.technician_repo.stamp_assignment(technician.id, Utc::now()).await?;
        tracing::info!(
            ticket_id = %ticket.id,
            technician_id = %technician.id,
            admin_id = %admin_id,
            "Ticket manually assigned"
        );
        self.fan_out(&ticket, TicketChangeKind::Assigned).await;
        Ok(ticket)
    }

    async fn unassign_all(&self, technician_id: Uuid, admin_id: Uuid) -> DispatchResult<usize> {
        self.technician_repo
            .get_by_id(technician_id)
            .await?
            .ok_or(DispatchException::NoSuchTechnician { id: technician_id })?;

        let tickets = self.ticket_repo.clear_assignments(technician_id).await?;
        tracing::info!(
            technician_id = %technician_id,
            admin_id = %admin_id,
            count = tickets.len(),
            "Technician unassigned from open tickets"
        );
        for ticket in &tickets {
            self.fan_out(ticket, TicketChangeKind::Unassigned).await;
        }
        Ok(tickets.len())
    }

    async fn set_auto_assign(
        &self,
        admin_id: Uuid,
        enabled: bool,
    ) -> DispatchResult<SystemSettings> {
        let settings = self.settings_repo.set_auto_assign(enabled).await?;
        tracing::info!(admin_id = %admin_id, enabled, "Auto-assign toggled");
        Ok(settings)
    }
}

impl AssignmentServiceImpl {
    async fn fan_out(&self, ticket: &Ticket, change: TicketChangeKind) {
        if let Err(e) = self.notifier.on_ticket_change(ticket, change).await {
            tracing::warn!(ticket_id = %ticket.id, "Failed to dispatch notifications: {e}");
        }
        let event = ChangeMsg {
            id: ticket.id,
            info: Info::Ticket(TicketChangeInfo {
                change,
                status: ticket.status,
                technician_id: ticket.technician_id,
                priority: ticket.priority,
                paused: ticket.paused,
            }),
        };
        if let Err(e) = self.status_publisher.publish(&event, &msg::ticket_topic(ticket.id)).await
        {
            tracing::warn!(ticket_id = %ticket.id, "Failed to publish ticket event: {e}");
        }
    }
}
