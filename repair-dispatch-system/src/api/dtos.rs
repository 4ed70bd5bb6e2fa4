use domain_dispatch::model::entity::technician::TechnicianRole;
use domain_dispatch::model::entity::ticket::TicketStatus;
use domain_dispatch::model::entity::user::ActorRole;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceRequest {
    pub actor_id: Uuid,
    pub target: TicketStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub actor_id: Uuid,
    pub reason: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackRequest {
    pub admin_id: Uuid,
    pub reason: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAutoAssignRequest {
    pub admin_id: Uuid,
    pub enabled: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignManualRequest {
    pub technician_id: Uuid,
    pub admin_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignRequest {
    pub admin_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
    pub sender_id: Uuid,
    pub title: String,
    pub message: String,
    pub target: ActorRole,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: String,
    pub phone: String,
    pub role: ActorRole,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTechnicianRequest {
    pub name: String,
    pub phone: String,
    pub role: TechnicianRole,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailabilityRequest {
    pub online: bool,
    pub available: bool,
}
