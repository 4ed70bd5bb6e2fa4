use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::ticket::TicketStatus;

pub type DispatchResult<T> = Result<T, DispatchException>;

#[derive(Error, Debug)]
pub enum DispatchException {
    /// Rejected before any mutation; the caller may retry with corrected
    /// input.
    #[error("A non-empty reason is required for this action.")]
    ReasonRequired,

    #[error("Invalid input: {reason}.")]
    Validation { reason: String },

    #[error("Transition from {from:?} to {to:?} is not allowed for this actor.")]
    IllegalTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    #[error("Ticket {ticket_id} is not assigned to technician {technician_id}.")]
    NotAssignedTechnician {
        ticket_id: Uuid,
        technician_id: Uuid,
    },

    #[error("Ticket {id} is paused; wait for an administrator to resume it.")]
    WorkflowPaused { id: Uuid },

    #[error("Ticket {id} is cancelled and can only be changed by rollback.")]
    TicketCancelled { id: Uuid },

    #[error("Ticket {id} is already {status:?}.")]
    TerminalTicket { id: Uuid, status: TicketStatus },

    #[error("Completion position is {distance:.1} m from the ticket location (limit {limit} m).")]
    OutsideGeofence { distance: f64, limit: f64 },

    #[error("Current position is unknown; field completion requires a position fix.")]
    PositionUnavailable,

    #[error("Audit entry {id} can not be rolled back.")]
    NotRollbackable { id: Uuid },

    #[error("There is no ticket with id: {id}.")]
    NoSuchTicket { id: Uuid },

    #[error("There is no technician with id: {id}.")]
    NoSuchTechnician { id: Uuid },

    #[error("There is no user with id: {id}.")]
    NoSuchUser { id: Uuid },

    #[error("There is no audit entry with id: {id}.")]
    NoSuchAuditEntry { id: Uuid },

    #[error("Dispatch internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for DispatchException {
    fn from(e: anyhow::Error) -> Self {
        DispatchException::InternalError { source: e }
    }
}

impl DispatchException {
    /// Guard for the mandatory-reason rule shared by overrides, rejections
    /// and rollbacks.
    pub fn require_reason(reason: &str) -> DispatchResult<()> {
        if reason.trim().is_empty() {
            return Err(DispatchException::ReasonRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reasons_are_rejected() {
        assert!(DispatchException::require_reason("").is_err());
        assert!(DispatchException::require_reason("   \t").is_err());
        assert!(DispatchException::require_reason("stale ticket").is_ok());
    }
}
