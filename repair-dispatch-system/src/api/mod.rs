mod admin;
mod assignment;
mod dtos;
mod notification;
mod roster;
mod ticket;

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use domain_dispatch::exception::DispatchException;
use uuid::Uuid;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ticket::create_ticket)
        .service(ticket::advance_ticket)
        .service(ticket::complete_ticket)
        .service(ticket::reject_ticket)
        .service(ticket::audit_history)
        .service(admin::override_ticket)
        .service(admin::rollback_entry)
        .service(admin::set_auto_assign)
        .service(assignment::assign_auto)
        .service(assignment::assign_manual)
        .service(assignment::sweep)
        .service(assignment::unassign_all)
        .service(notification::list_notifications)
        .service(notification::mark_read)
        .service(notification::mark_all_read)
        .service(notification::delete_notification)
        .service(notification::delete_all)
        .service(notification::broadcast)
        .service(roster::register_user)
        .service(roster::register_technician)
        .service(roster::set_availability);
}

pub fn extract_uuid(s: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(s).map_err(|_| {
        ApiError(DispatchException::Validation {
            reason: format!("'{s}' is not a valid id"),
        })
    })
}

pub type ApiResult<T> = Result<web::Json<T>, ApiError>;

#[derive(Debug)]
pub struct ApiError(pub DispatchException);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DispatchException> for ApiError {
    fn from(e: DispatchException) -> Self {
        Self(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self(DispatchException::from(e))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        use DispatchException::*;
        match &self.0 {
            ReasonRequired | Validation { .. } => StatusCode::BAD_REQUEST,
            IllegalTransition { .. }
            | NotAssignedTechnician { .. }
            | TicketCancelled { .. }
            | TerminalTicket { .. }
            | NotRollbackable { .. } => StatusCode::CONFLICT,
            WorkflowPaused { .. } => StatusCode::LOCKED,
            OutsideGeofence { .. } | PositionUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            NoSuchTicket { .. } | NoSuchTechnician { .. } | NoSuchUser { .. }
            | NoSuchAuditEntry { .. } => StatusCode::NOT_FOUND,
            InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.to_string() }))
    }
}
