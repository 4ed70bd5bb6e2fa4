use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::ticket::Ticket;

/// One administrative mutation, captured with full before/after snapshots.
/// Entries are append-only and are never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub actor_id: Uuid,
    pub action: AuditAction,
    /// Ticket state immediately before the mutation.
    pub previous: Ticket,
    /// Ticket state immediately after the mutation.
    pub current: Ticket,
    /// Human-entered, never blank.
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Deletes are deliberately absent: a delete is terminal and leaves no
/// entry to roll back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AuditAction {
    StatusChange,
    PriorityUpdate,
    Edit,
    PauseToggle,
    Rollback,
}

impl AuditAction {
    /// A revert of a revert is rejected, which caps rollback chains at one
    /// level.
    pub fn is_rollback_eligible(&self) -> bool {
        !matches!(self, Self::Rollback)
    }
}
