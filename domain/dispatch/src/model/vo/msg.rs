use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::audit_log::AuditAction;
use crate::model::entity::notification::NotificationKind;
use crate::model::entity::ticket::{Priority, TicketStatus};

/// Realtime event envelope. `id` is the ticket or notification the event is
/// about. Delivery is at-least-once and ordered per topic only, so every
/// ticket event carries the authoritative status snapshot rather than a
/// delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMsg {
    pub id: Uuid,
    pub info: Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Info {
    Ticket(TicketChangeInfo),
    Audit(AuditChangeInfo),
    Notification(NotificationChangeInfo),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketChangeInfo {
    pub change: TicketChangeKind,
    pub status: TicketStatus,
    pub technician_id: Option<Uuid>,
    pub priority: Priority,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketChangeKind {
    Created,
    Assigned,
    Unassigned,
    StatusChanged,
    PriorityUpdated,
    Edited,
    PauseToggled,
    RolledBack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditChangeInfo {
    pub entry_id: Uuid,
    pub action: AuditAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChangeInfo {
    pub kind: NotificationKind,
    pub title: String,
}

/// Per-ticket stream carrying status and audit changes.
pub fn ticket_topic(ticket_id: Uuid) -> String {
    format!("ticket-{ticket_id}")
}

/// Per-user stream carrying notifications.
pub fn user_topic(user_id: Uuid) -> String {
    format!("user-{user_id}")
}
