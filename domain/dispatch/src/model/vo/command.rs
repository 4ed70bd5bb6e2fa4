use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::ticket::{Priority, TicketKind, TicketStatus};
use crate::model::vo::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketCommand {
    pub requester_id: Uuid,
    pub kind: TicketKind,
    pub category: String,
    pub description: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub voice_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTicketCommand {
    pub ticket_id: Uuid,
    pub actor_id: Uuid,
    /// Current technician position; required for field dispatch.
    pub position: Option<GeoPoint>,
    pub remarks: Option<String>,
    pub replaced_parts: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub voice_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverrideCommand {
    pub ticket_id: Uuid,
    pub admin_id: Uuid,
    pub action: OverrideAction,
    /// Mandatory for every override; a distinct destructive-action
    /// confirmation for deletes.
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OverrideAction {
    StatusChange { target: TicketStatus },
    PriorityUpdate { priority: Priority },
    Edit { patch: TicketPatch },
    PauseToggle,
    Delete,
}

/// Field edit payload; only the provided fields change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<GeoPoint>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.description.is_none() && self.location.is_none()
    }
}
