use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Any actor known to the system: requesters, technicians, administrators.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub role: ActorRole,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum ActorRole {
    #[default]
    Requester,
    Technician,
    Admin,
}
