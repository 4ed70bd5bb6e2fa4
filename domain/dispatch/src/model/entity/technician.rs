use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roster entry for a repair technician. Shares its id with the
/// technician's user record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub name: String,
    pub role: TechnicianRole,
    pub online: bool,
    pub available: bool,
    /// Drives round-robin ordering. `None` means never assigned.
    pub last_assigned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum TechnicianRole {
    /// Travels to the requester's location; subject to the geofence gate.
    #[default]
    FieldDispatch,
    /// Works at a fixed site; exempt from the geofence gate.
    Depot,
}

impl Technician {
    pub fn is_eligible(&self, role: TechnicianRole) -> bool {
        self.role == role && self.online && self.available
    }
}
