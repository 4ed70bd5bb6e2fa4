use actix_web::post;
use actix_web::web::{Data, Json, Path};
use domain_dispatch::model::entity::Ticket;
use domain_dispatch::service::AssignmentService;

use crate::api::dtos::{AssignManualRequest, UnassignRequest};
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("assignment/Auto/{ticket_id}")]
pub async fn assign_auto(
    provider: Data<ServiceProvider>,
    ticket_id: Path<String>,
) -> ApiResult<Option<Ticket>> {
    let ticket_id = extract_uuid(&ticket_id)?;
    let ticket = provider.assignment.assign_auto(ticket_id).await?;
    Ok(Json(ticket))
}

#[post("assignment/Manual/{ticket_id}")]
pub async fn assign_manual(
    provider: Data<ServiceProvider>,
    ticket_id: Path<String>,
    req: Json<AssignManualRequest>,
) -> ApiResult<Ticket> {
    let ticket_id = extract_uuid(&ticket_id)?;
    let ticket =
        provider.assignment.assign_manual(ticket_id, req.technician_id, req.admin_id).await?;
    Ok(Json(ticket))
}

#[post("assignment/Sweep")]
pub async fn sweep(provider: Data<ServiceProvider>) -> ApiResult<usize> {
    let assigned = provider.assignment.sweep().await?;
    Ok(Json(assigned))
}

#[post("assignment/UnassignAll/{technician_id}")]
pub async fn unassign_all(
    provider: Data<ServiceProvider>,
    technician_id: Path<String>,
    req: Json<UnassignRequest>,
) -> ApiResult<usize> {
    let technician_id = extract_uuid(&technician_id)?;
    let count = provider.assignment.unassign_all(technician_id, req.admin_id).await?;
    Ok(Json(count))
}
