use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_dispatch::{
    exception::{DispatchException, DispatchResult},
    model::{
        entity::{
            audit_log::AuditAction,
            technician::{Technician, TechnicianRole},
            ticket::{RequesterSnapshot, Ticket, TicketStatus},
            user::ActorRole,
        },
        vo::{
            command::{
                AdminOverrideCommand, CompleteTicketCommand, CreateTicketCommand, OverrideAction,
            },
            geo::{haversine_distance, within_geofence, GEOFENCE_RADIUS_METERS},
            msg::{self, ChangeMsg, Info, TicketChangeInfo, TicketChangeKind},
            permission::transition_allowed,
        },
    },
    repository::{TechnicianRepo, TicketRepo, UserRepo},
    service::{
        AssignmentService, AuditService, EventPublisher, NotificationService,
        TicketLifecycleService,
    },
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct TicketLifecycleServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    technician_repo: Arc<dyn TechnicianRepo>,
    user_repo: Arc<dyn UserRepo>,
    assignment: Arc<dyn AssignmentService>,
    audit: Arc<dyn AuditService>,
    notifier: Arc<dyn NotificationService>,
    status_publisher: Arc<dyn EventPublisher<ChangeMsg>>,
}

#[async_trait]
impl TicketLifecycleService for TicketLifecycleServiceImpl {
    async fn create(&self, cmd: CreateTicketCommand) -> DispatchResult<Ticket> {
        if cmd.category.trim().is_empty() {
            return Err(DispatchException::Validation {
                reason: "category must not be empty".to_owned(),
            });
        }
        if cmd.description.trim().is_empty() {
            return Err(DispatchException::Validation {
                reason: "description must not be empty".to_owned(),
            });
        }
        let requester = self
            .user_repo
            .get_by_id(cmd.requester_id)
            .await?
            .ok_or(DispatchException::NoSuchUser {
                id: cmd.requester_id,
            })?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            requester_id: requester.id,
            technician_id: None,
            kind: cmd.kind,
            category: cmd.category,
            description: cmd.description,
            status: TicketStatus::Pending,
            requester: RequesterSnapshot::from(&requester),
            location: cmd.location,
            priority: cmd.priority,
            paused: false,
            created_at: Utc::now(),
            image_urls: cmd.image_urls,
            voice_urls: cmd.voice_urls,
            ..Default::default()
        };
        self.ticket_repo.insert(&ticket).await?;
        self.fan_out(&ticket, TicketChangeKind::Created).await;

        // Assignment is a hint and must not lose the created ticket.
        match self.assignment.assign_auto(ticket.id).await {
            Ok(Some(assigned)) => Ok(assigned),
            Ok(None) => Ok(ticket),
            Err(e) => {
                tracing::warn!(ticket_id = %ticket.id, "Automatic assignment failed: {e}");
                Ok(ticket)
            }
        }
    }

    async fn advance(
        &self,
        ticket_id: Uuid,
        actor_id: Uuid,
        target: TicketStatus,
    ) -> DispatchResult<Ticket> {
        let mut ticket = self.get_ticket(ticket_id).await?;
        let technician = self.get_technician(actor_id).await?;

        self.check_transition(&ticket, &technician, target)?;
        match target {
            TicketStatus::Completed => {
                return Err(DispatchException::Validation {
                    reason: "completion carries a position and remarks; use the completion \
                             operation"
                        .to_owned(),
                })
            }
            TicketStatus::Cancelled => {
                return Err(DispatchException::Validation {
                    reason: "rejection carries a reason; use the rejection operation".to_owned(),
                })
            }
            _ => {}
        }

        if ticket.technician_id.is_none() {
            // Pending -> Accepted self-claim.
            ticket.technician_id = Some(technician.id);
        }
        ticket.enter_status(target, Utc::now());
        self.ticket_repo.update(&ticket).await?;
        self.fan_out(&ticket, TicketChangeKind::StatusChanged).await;
        Ok(ticket)
    }

    async fn complete(&self, cmd: CompleteTicketCommand) -> DispatchResult<Ticket> {
        let mut ticket = self.get_ticket(cmd.ticket_id).await?;
        let technician = self.get_technician(cmd.actor_id).await?;

        self.check_transition(&ticket, &technician, TicketStatus::Completed)?;

        // Geofence gate, field dispatch only. A missing fix fails closed.
        if technician.role == TechnicianRole::FieldDispatch {
            let position = cmd.position.ok_or(DispatchException::PositionUnavailable)?;
            let distance = haversine_distance(&position, &ticket.location);
            if !within_geofence(distance) {
                return Err(DispatchException::OutsideGeofence {
                    distance,
                    limit: GEOFENCE_RADIUS_METERS,
                });
            }
        }

        ticket.remarks = cmd.remarks;
        ticket.replaced_parts = cmd.replaced_parts;
        ticket.image_urls.extend(cmd.image_urls);
        ticket.voice_urls.extend(cmd.voice_urls);
        ticket.enter_status(TicketStatus::Completed, Utc::now());
        self.ticket_repo.update(&ticket).await?;
        self.fan_out(&ticket, TicketChangeKind::StatusChanged).await;
        Ok(ticket)
    }

    async fn reject(
        &self,
        ticket_id: Uuid,
        actor_id: Uuid,
        reason: String,
        image_urls: Vec<String>,
    ) -> DispatchResult<Ticket> {
        DispatchException::require_reason(&reason)?;
        let mut ticket = self.get_ticket(ticket_id).await?;
        let technician = self.get_technician(actor_id).await?;

        self.check_transition(&ticket, &technician, TicketStatus::Cancelled)?;

        ticket.reject_reason = Some(reason);
        ticket.image_urls.extend(image_urls);
        ticket.enter_status(TicketStatus::Cancelled, Utc::now());
        self.ticket_repo.update(&ticket).await?;
        self.fan_out(&ticket, TicketChangeKind::StatusChanged).await;
        Ok(ticket)
    }

    async fn admin_override(&self, cmd: AdminOverrideCommand) -> DispatchResult<Option<Ticket>> {
        DispatchException::require_reason(&cmd.reason)?;
        let ticket = self.get_ticket(cmd.ticket_id).await?;

        if ticket.status == TicketStatus::Cancelled
            && !matches!(cmd.action, OverrideAction::Delete)
        {
            return Err(DispatchException::TicketCancelled { id: ticket.id });
        }

        let previous = ticket.clone();
        let mut current = ticket;
        let (action, change) = match cmd.action {
            OverrideAction::Delete => {
                // Terminal by design: no entry is written, nothing survives
                // to roll the delete back.
                self.ticket_repo.delete(current.id).await?;
                tracing::info!(
                    ticket_id = %current.id,
                    admin_id = %cmd.admin_id,
                    "Ticket deleted irreversibly"
                );
                return Ok(None);
            }
            OverrideAction::StatusChange { target } => {
                current.enter_status(target, Utc::now());
                (AuditAction::StatusChange, TicketChangeKind::StatusChanged)
            }
            OverrideAction::PriorityUpdate { priority } => {
                current.priority = priority;
                (AuditAction::PriorityUpdate, TicketChangeKind::PriorityUpdated)
            }
            OverrideAction::Edit { patch } => {
                if patch.is_empty() {
                    return Err(DispatchException::Validation {
                        reason: "edit must change at least one field".to_owned(),
                    });
                }
                if let Some(category) = patch.category {
                    current.category = category;
                }
                if let Some(description) = patch.description {
                    current.description = description;
                }
                if let Some(location) = patch.location {
                    current.location = location;
                }
                (AuditAction::Edit, TicketChangeKind::Edited)
            }
            OverrideAction::PauseToggle => {
                current.paused = !current.paused;
                (AuditAction::PauseToggle, TicketChangeKind::PauseToggled)
            }
        };

        self.ticket_repo.update(&current).await?;
        self.audit
            .record(cmd.admin_id, action, &previous, &current, &cmd.reason)
            .await?;
        self.fan_out(&current, change).await;
        Ok(Some(current))
    }
}

impl TicketLifecycleServiceImpl {
    async fn get_ticket(&self, id: Uuid) -> DispatchResult<Ticket> {
        self.ticket_repo
            .get_by_id(id)
            .await?
            .ok_or(DispatchException::NoSuchTicket { id })
    }

    async fn get_technician(&self, id: Uuid) -> DispatchResult<Technician> {
        self.technician_repo
            .get_by_id(id)
            .await?
            .ok_or(DispatchException::NoSuchTechnician { id })
    }

    /// Technician transition contract, checked in order: pause gate, actor
    /// identity, capability table.
    fn check_transition(
        &self,
        ticket: &Ticket,
        technician: &Technician,
        target: TicketStatus,
    ) -> DispatchResult<()> {
        if ticket.paused {
            return Err(DispatchException::WorkflowPaused { id: ticket.id });
        }
        let self_claim = ticket.status == TicketStatus::Pending
            && target == TicketStatus::Accepted
            && ticket.technician_id.is_none();
        if !self_claim && ticket.technician_id != Some(technician.id) {
            return Err(DispatchException::NotAssignedTechnician {
                ticket_id: ticket.id,
                technician_id: technician.id,
            });
        }
        if !transition_allowed(ActorRole::Technician, ticket.status, target) {
            return Err(DispatchException::IllegalTransition {
                from: ticket.status,
                to: target,
            });
        }
        Ok(())
    }

    /// The mutation is already committed; notification and push failures
    /// are logged, never propagated.
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
