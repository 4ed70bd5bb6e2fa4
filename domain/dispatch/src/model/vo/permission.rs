use crate::model::entity::ticket::TicketStatus;
use crate::model::entity::user::ActorRole;

/// Technician-side forward chain. Each row is (current, requested).
/// Completion shares the last row but runs through the geofence-gated
/// completion path.
const TECHNICIAN_CHAIN: &[(TicketStatus, TicketStatus)] = &[
    (TicketStatus::Pending, TicketStatus::Accepted),
    (TicketStatus::Accepted, TicketStatus::OnWay),
    (TicketStatus::OnWay, TicketStatus::InProgress),
    (TicketStatus::InProgress, TicketStatus::Completed),
];

/// Capability table for status transitions, evaluated before any mutation.
///
/// Administrators bypass adjacency entirely; their overrides are audited
/// instead. Requesters never drive transitions. Technicians follow the
/// forward chain, plus rejection of any non-terminal ticket.
pub fn transition_allowed(role: ActorRole, from: TicketStatus, to: TicketStatus) -> bool {
    match role {
        ActorRole::Admin => true,
        ActorRole::Requester => false,
        ActorRole::Technician => {
            TECHNICIAN_CHAIN.contains(&(from, to))
                || (!from.is_terminal() && to == TicketStatus::Cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::ticket::TicketStatus::*;

    #[test]
    fn technician_follows_the_forward_chain() {
        assert!(transition_allowed(ActorRole::Technician, Pending, Accepted));
        assert!(transition_allowed(ActorRole::Technician, OnWay, InProgress));
        assert!(!transition_allowed(ActorRole::Technician, Accepted, Completed));
        assert!(!transition_allowed(ActorRole::Technician, Accepted, Pending));
        assert!(!transition_allowed(ActorRole::Technician, Pending, InProgress));
    }

    #[test]
    fn technician_may_reject_any_non_terminal_ticket() {
        assert!(transition_allowed(ActorRole::Technician, Pending, Cancelled));
        assert!(transition_allowed(ActorRole::Technician, InProgress, Cancelled));
        assert!(!transition_allowed(ActorRole::Technician, Completed, Cancelled));
        assert!(!transition_allowed(ActorRole::Technician, Cancelled, Cancelled));
    }

    #[test]
    fn requester_never_transitions_and_admin_always_may() {
        assert!(!transition_allowed(ActorRole::Requester, Pending, Accepted));
        assert!(transition_allowed(ActorRole::Admin, Completed, Pending));
        assert!(transition_allowed(ActorRole::Admin, Pending, Completed));
    }
}
