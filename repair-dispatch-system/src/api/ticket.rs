use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use domain_dispatch::model::entity::{AuditLogEntry, Ticket};
use domain_dispatch::model::vo::command::{CompleteTicketCommand, CreateTicketCommand};
use domain_dispatch::service::{AuditService, TicketLifecycleService};

use crate::api::dtos::{AdvanceRequest, RejectRequest};
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("ticket/Create")]
pub async fn create_ticket(
    provider: Data<ServiceProvider>,
    cmd: Json<CreateTicketCommand>,
) -> ApiResult<Ticket> {
    let ticket = provider.lifecycle.create(cmd.into_inner()).await?;
    Ok(Json(ticket))
}

#[post("ticket/Advance/{id}")]
pub async fn advance_ticket(
    provider: Data<ServiceProvider>,
    id: Path<String>,
    req: Json<AdvanceRequest>,
) -> ApiResult<Ticket> {
    let id = extract_uuid(&id)?;
    let ticket = provider.lifecycle.advance(id, req.actor_id, req.target).await?;
    Ok(Json(ticket))
}

#[post("ticket/Complete")]
pub async fn complete_ticket(
    provider: Data<ServiceProvider>,
    cmd: Json<CompleteTicketCommand>,
) -> ApiResult<Ticket> {
    let ticket = provider.lifecycle.complete(cmd.into_inner()).await?;
    Ok(Json(ticket))
}

#[post("ticket/Reject/{id}")]
pub async fn reject_ticket(
    provider: Data<ServiceProvider>,
    id: Path<String>,
    req: Json<RejectRequest>,
) -> ApiResult<Ticket> {
    let id = extract_uuid(&id)?;
    let req = req.into_inner();
    let ticket =
        provider.lifecycle.reject(id, req.actor_id, req.reason, req.image_urls).await?;
    Ok(Json(ticket))
}

#[get("ticket/AuditHistory/{id}")]
pub async fn audit_history(
    provider: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<Vec<AuditLogEntry>> {
    let id = extract_uuid(&id)?;
    let history = provider.audit.history(id).await?;
    Ok(Json(history))
}
