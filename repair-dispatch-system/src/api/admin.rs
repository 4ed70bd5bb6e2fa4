use actix_web::post;
use actix_web::web::{Data, Json, Path};
use domain_dispatch::model::entity::{SystemSettings, Ticket};
use domain_dispatch::model::vo::command::AdminOverrideCommand;
use domain_dispatch::service::{AssignmentService, AuditService, TicketLifecycleService};

use crate::api::dtos::{RollbackRequest, SetAutoAssignRequest};
use crate::api::{extract_uuid, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("admin/Override")]
pub async fn override_ticket(
    provider: Data<ServiceProvider>,
    cmd: Json<AdminOverrideCommand>,
) -> ApiResult<Option<Ticket>> {
    let ticket = provider.lifecycle.admin_override(cmd.into_inner()).await?;
    Ok(Json(ticket))
}

#[post("admin/Rollback/{entry_id}")]
pub async fn rollback_entry(
    provider: Data<ServiceProvider>,
    entry_id: Path<String>,
    req: Json<RollbackRequest>,
) -> ApiResult<Ticket> {
    let entry_id = extract_uuid(&entry_id)?;
    let req = req.into_inner();
    let ticket = provider.audit.rollback(entry_id, req.admin_id, req.reason).await?;
    Ok(Json(ticket))
}

#[post("admin/SetAutoAssign")]
pub async fn set_auto_assign(
    provider: Data<ServiceProvider>,
    req: Json<SetAutoAssignRequest>,
) -> ApiResult<SystemSettings> {
    let settings = provider.assignment.set_auto_assign(req.admin_id, req.enabled).await?;
    Ok(Json(settings))
}
