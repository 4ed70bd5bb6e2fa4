use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_dispatch::{
    exception::DispatchResult,
    model::{
        entity::{
            notification::NotificationKind, ticket::TicketStatus, user::ActorRole, Notification,
            Ticket,
        },
        vo::msg::{self, ChangeMsg, Info, NotificationChangeInfo, TicketChangeKind},
    },
    repository::{NotificationRepo, UserRepo},
    service::{EventPublisher, NotificationService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
    user_repo: Arc<dyn UserRepo>,
    publisher: Arc<dyn EventPublisher<ChangeMsg>>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn on_ticket_change(
        &self,
        ticket: &Ticket,
        change: TicketChangeKind,
    ) -> DispatchResult<Vec<Notification>> {
        let mut pending = Vec::new();
        match change {
            TicketChangeKind::Created => {
                for admin in self.user_repo.list_ids_by_role(ActorRole::Admin).await? {
                    pending.push(self.build(
                        admin,
                        "New ticket",
                        &format!("{}: {}", ticket.category, ticket.description),
                        NotificationKind::Info,
                        ticket,
                    ));
                }
            }
            TicketChangeKind::Assigned => {
                if let Some(technician_id) = ticket.technician_id {
                    pending.push(self.build(
                        technician_id,
                        "Ticket assigned to you",
                        &format!("{}: {}", ticket.category, ticket.description),
                        NotificationKind::Alert,
                        ticket,
                    ));
                }
            }
            TicketChangeKind::Unassigned => {
                pending.push(self.build(
                    ticket.requester_id,
                    "Looking for a technician",
                    "Your ticket returned to the dispatch queue.",
                    NotificationKind::Warning,
                    ticket,
                ));
            }
            TicketChangeKind::StatusChanged => {
                let (title, kind) = match ticket.status {
                    TicketStatus::Completed => ("Ticket completed", NotificationKind::Success),
                    TicketStatus::Cancelled => ("Ticket cancelled", NotificationKind::Error),
                    _ => ("Ticket update", NotificationKind::Info),
                };
                pending.push(self.build(
                    ticket.requester_id,
                    title,
                    &format!("Status is now {:?}.", ticket.status),
                    kind,
                    ticket,
                ));
                if ticket.status == TicketStatus::Cancelled {
                    for admin in self.user_repo.list_ids_by_role(ActorRole::Admin).await? {
                        pending.push(self.build(
                            admin,
                            "Ticket cancelled",
                            &format!(
                                "Reason: {}",
                                ticket.reject_reason.as_deref().unwrap_or("administrative")
                            ),
                            NotificationKind::Warning,
                            ticket,
                        ));
                    }
                }
            }
            TicketChangeKind::PauseToggled => {
                let (title, body) = if ticket.paused {
                    ("Ticket paused", "Work is frozen until an administrator resumes it.")
                } else {
                    ("Ticket resumed", "Work may continue.")
                };
                pending.push(self.build(
                    ticket.requester_id,
                    title,
                    body,
                    NotificationKind::Warning,
                    ticket,
                ));
                if let Some(technician_id) = ticket.technician_id {
                    pending.push(self.build(
                        technician_id,
                        title,
                        body,
                        NotificationKind::Warning,
                        ticket,
                    ));
                }
            }
            TicketChangeKind::PriorityUpdated
            | TicketChangeKind::Edited
            | TicketChangeKind::RolledBack => {
                pending.push(self.build(
                    ticket.requester_id,
                    "Ticket updated",
                    "An administrator updated your ticket.",
                    NotificationKind::Info,
                    ticket,
                ));
                if let Some(technician_id) = ticket.technician_id {
                    pending.push(self.build(
                        technician_id,
                        "Ticket updated",
                        "An administrator updated a ticket assigned to you.",
                        NotificationKind::Info,
                        ticket,
                    ));
                }
            }
        }

        let mut delivered = Vec::with_capacity(pending.len());
        for notification in pending {
            if let Some(stored) = self.deliver(notification).await? {
                delivered.push(stored);
            }
        }
        Ok(delivered)
    }

    async fn broadcast(
        &self,
        sender_id: Uuid,
        title: &str,
        message: &str,
        target: ActorRole,
    ) -> DispatchResult<usize> {
        // Membership is resolved at send time; later joiners never receive
        // this broadcast.
        let members = self.user_repo.list_ids_by_role(target).await?;
        for member in &members {
            let notification = Notification {
                id: Uuid::new_v4(),
                recipient_id: *member,
                title: title.to_owned(),
                message: message.to_owned(),
                kind: NotificationKind::Info,
                read: false,
                ticket_id: None,
                created_at: Utc::now(),
            };
            self.deliver(notification).await?;
        }
        tracing::info!(sender_id = %sender_id, ?target, count = members.len(), "Broadcast sent");
        Ok(members.len())
    }

    async fn list_for_user(&self, user_id: Uuid) -> DispatchResult<Vec<Notification>> {
        Ok(self.notification_repo.list_for_user(user_id).await?)
    }

    async fn mark_read(&self, id: Uuid) -> DispatchResult<()> {
        // Marking an already-read or missing notification is a no-op.
        self.notification_repo.mark_read(id).await?;
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Uuid) -> DispatchResult<usize> {
        Ok(self.notification_repo.mark_all_read(user_id).await?)
    }

    async fn delete(&self, id: Uuid) -> DispatchResult<()> {
        self.notification_repo.delete(id).await?;
        Ok(())
    }

    async fn delete_all(&self, user_id: Uuid) -> DispatchResult<usize> {
        Ok(self.notification_repo.delete_all(user_id).await?)
    }
}

impl NotificationServiceImpl {
    fn build(
        &self,
        recipient_id: Uuid,
        title: &str,
        message: &str,
        kind: NotificationKind,
        ticket: &Ticket,
    ) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient_id,
            title: title.to_owned(),
            message: message.to_owned(),
            kind,
            read: false,
            ticket_id: Some(ticket.id),
            created_at: Utc::now(),
        }
    }

    /// Store the record (deduped by id) and push it on the recipient's
    /// channel. Push failures are logged; the record stays durable either
    /// way.
    async fn deliver(&self, notification: Notification) -> DispatchResult<Option<Notification>> {
        if !self.notification_repo.insert(&notification).await? {
            return Ok(None);
        }
        let event = ChangeMsg {
            id: notification.id,
            info: Info::Notification(NotificationChangeInfo {
                kind: notification.kind,
                title: notification.title.clone(),
            }),
        };
        if let Err(e) =
            self.publisher.publish(&event, &msg::user_topic(notification.recipient_id)).await
        {
            tracing::warn!(
                notification_id = %notification.id,
                "Failed to push notification: {e}"
            );
        }
        Ok(Some(notification))
    }
}
