use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::technician::TechnicianRole;
use crate::model::entity::user::User;
use crate::model::vo::GeoPoint;

/// A roadside or depot repair request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub requester_id: Uuid,
    /// Currently assigned technician. At most one at any time.
    pub technician_id: Option<Uuid>,
    pub kind: TicketKind,
    /// Issue tag, e.g. "battery", "flat-tire".
    pub category: String,
    pub description: String,
    pub status: TicketStatus,
    /// Requester profile fields frozen at creation time. Never re-derived
    /// from the live profile afterwards.
    pub requester: RequesterSnapshot,
    pub location: GeoPoint,
    pub priority: Priority,
    /// Administrative freeze. Blocks technician transitions, not overrides.
    pub paused: bool,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub on_way_at: Option<DateTime<Utc>>,
    pub in_progress_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub reject_reason: Option<String>,
    pub remarks: Option<String>,
    pub replaced_parts: Option<String>,
    /// Opaque evidence URLs, stored elsewhere.
    pub image_urls: Vec<String>,
    pub voice_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum TicketKind {
    /// Repair at the requester's location.
    #[default]
    OnSite,
    /// Vehicle or device brought to a depot.
    Depot,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    #[default]
    Pending,
    Accepted,
    OnWay,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Requester identity, contact and balance at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequesterSnapshot {
    pub name: String,
    pub phone: String,
    pub balance: f64,
}

impl From<&User> for RequesterSnapshot {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            balance: user.balance,
        }
    }
}

impl TicketKind {
    /// Which technician role a ticket of this kind dispatches to.
    pub fn required_role(&self) -> TechnicianRole {
        match self {
            Self::OnSite => TechnicianRole::FieldDispatch,
            Self::Depot => TechnicianRole::Depot,
        }
    }
}

impl TicketStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The next status in the forward chain, if any.
    pub fn next(&self) -> Option<TicketStatus> {
        match self {
            Self::Pending => Some(Self::Accepted),
            Self::Accepted => Some(Self::OnWay),
            Self::OnWay => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed | Self::Cancelled => None,
        }
    }
}

impl Ticket {
    /// Set `status` and stamp the matching transition timestamp.
    pub fn enter_status(&mut self, status: TicketStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            TicketStatus::Accepted => self.accepted_at = Some(now),
            TicketStatus::OnWay => self.on_way_at = Some(now),
            TicketStatus::InProgress => self.in_progress_at = Some(now),
            TicketStatus::Completed => self.completed_at = Some(now),
            TicketStatus::Pending | TicketStatus::Cancelled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_ends_at_terminal_statuses() {
        assert_eq!(TicketStatus::Pending.next(), Some(TicketStatus::Accepted));
        assert_eq!(TicketStatus::InProgress.next(), Some(TicketStatus::Completed));
        assert_eq!(TicketStatus::Completed.next(), None);
        assert_eq!(TicketStatus::Cancelled.next(), None);
        assert!(TicketStatus::Cancelled.is_terminal());
        assert!(!TicketStatus::OnWay.is_terminal());
    }

    #[test]
    fn entering_a_status_stamps_its_timestamp() {
        let mut ticket = Ticket::default();
        let now = Utc::now();
        ticket.enter_status(TicketStatus::Accepted, now);
        assert_eq!(ticket.status, TicketStatus::Accepted);
        assert_eq!(ticket.accepted_at, Some(now));
        assert!(ticket.on_way_at.is_none());
    }
}
