mod common;

use common::*;
use domain_dispatch::exception::DispatchException;
use domain_dispatch::model::entity::audit_log::AuditAction;
use domain_dispatch::model::entity::ticket::{Priority, TicketStatus};
use domain_dispatch::model::vo::command::{AdminOverrideCommand, OverrideAction, TicketPatch};
use domain_dispatch::repository::TicketRepo;
use domain_dispatch::service::{AuditService, TicketLifecycleService};
use uuid::Uuid;

fn override_cmd(ticket_id: Uuid, admin_id: Uuid, action: OverrideAction, reason: &str) -> AdminOverrideCommand {
    AdminOverrideCommand {
        ticket_id,
        admin_id,
        action,
        reason: reason.to_owned(),
    }
}

#[tokio::test]
async fn forced_status_change_writes_one_entry() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::StatusChange {
                target: TicketStatus::Completed,
            },
            "Testing",
        ))
        .await
        .unwrap();

    let history = h.audit.history(ticket.id).await.unwrap();
    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert_eq!(entry.action, AuditAction::StatusChange);
    assert_eq!(entry.actor_id, admin);
    assert_eq!(entry.reason, "Testing");
    assert_eq!(entry.previous.status, TicketStatus::Pending);
    assert_eq!(entry.current.status, TicketStatus::Completed);
}

#[tokio::test]
async fn blank_reason_leaves_no_trace() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    let err = h
        .lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::Urgent,
            },
            "   ",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchException::ReasonRequired));

    let stored = TicketRepo::get_by_id(h.store.as_ref(), ticket.id).await.unwrap().unwrap();
    assert_eq!(stored.priority, Priority::Normal);
    assert!(h.audit.history(ticket.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn rollback_restores_the_previous_snapshot() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::Urgent,
            },
            "escalated by phone",
        ))
        .await
        .unwrap();

    let entry_id = h.audit.history(ticket.id).await.unwrap()[0].id;
    let restored = h
        .audit
        .rollback(entry_id, admin, "escalation was a mistake".to_owned())
        .await
        .unwrap();
    assert_eq!(restored.priority, Priority::Normal);

    let history = h.audit.history(ticket.id).await.unwrap();
    assert_eq!(history.len(), 2);
    // Newest first.
    let rollback_entry = &history[0];
    assert_eq!(rollback_entry.action, AuditAction::Rollback);
    assert_eq!(rollback_entry.previous.priority, Priority::Urgent);
    assert_eq!(rollback_entry.current.priority, Priority::Normal);
}

#[tokio::test]
async fn a_rollback_entry_is_not_rollbackable() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::High,
            },
            "escalate",
        ))
        .await
        .unwrap();
    let entry_id = h.audit.history(ticket.id).await.unwrap()[0].id;
    h.audit.rollback(entry_id, admin, "undo".to_owned()).await.unwrap();

    let rollback_id = h.audit.history(ticket.id).await.unwrap()[0].id;
    let err = h
        .audit
        .rollback(rollback_id, admin, "undo the undo".to_owned())
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchException::NotRollbackable { .. }));
}

#[tokio::test]
async fn repeated_rollbacks_capture_the_current_state() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::High,
            },
            "escalate",
        ))
        .await
        .unwrap();
    let first_entry = h.audit.history(ticket.id).await.unwrap()[0].id;

    h.audit.rollback(first_entry, admin, "first undo".to_owned()).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::Urgent,
            },
            "escalate again",
        ))
        .await
        .unwrap();

    // Rolling the same original entry back again snapshots today's state,
    // not the state it saw the first time.
    let restored =
        h.audit.rollback(first_entry, admin, "second undo".to_owned()).await.unwrap();
    assert_eq!(restored.priority, Priority::Normal);

    let newest = &h.audit.history(ticket.id).await.unwrap()[0];
    assert_eq!(newest.action, AuditAction::Rollback);
    assert_eq!(newest.previous.priority, Priority::Urgent);
}

#[tokio::test]
async fn edits_are_audited_with_both_snapshots() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::Edit {
                patch: TicketPatch {
                    description: Some("Car will not start, smells of fuel".to_owned()),
                    ..Default::default()
                },
            },
            "caller added detail",
        ))
        .await
        .unwrap();

    let entry = &h.audit.history(ticket.id).await.unwrap()[0];
    assert_eq!(entry.action, AuditAction::Edit);
    assert_eq!(entry.previous.description, "Car will not start");
    assert_eq!(entry.current.description, "Car will not start, smells of fuel");
}

#[tokio::test]
async fn deletes_are_terminal_and_unrecoverable() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::PriorityUpdate {
                priority: Priority::High,
            },
            "escalate",
        ))
        .await
        .unwrap();
    let prior_entry = h.audit.history(ticket.id).await.unwrap()[0].id;

    let gone = h
        .lifecycle
        .admin_override(override_cmd(
            ticket.id,
            admin,
            OverrideAction::Delete,
            "GDPR erasure request",
        ))
        .await
        .unwrap();
    assert!(gone.is_none());
    assert!(TicketRepo::get_by_id(h.store.as_ref(), ticket.id).await.unwrap().is_none());

    // The delete itself wrote no entry, and older entries are now dead ends.
    let history = h.audit.history(ticket.id).await.unwrap();
    assert_eq!(history.len(), 1);
    let err = h
        .audit
        .rollback(prior_entry, admin, "bring it back".to_owned())
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchException::NoSuchTicket { .. }));
}

#[tokio::test]
async fn pause_toggles_are_audited() {
    let h = harness();
    let requester = seed_requester(&h).await;
    let admin = seed_admin(&h).await;

    let ticket = h.lifecycle.create(create_cmd(requester)).await.unwrap();
    h.lifecycle
        .admin_override(override_cmd(ticket.id, admin, OverrideAction::PauseToggle, "dispute"))
        .await
        .unwrap();
    h.lifecycle
        .admin_override(override_cmd(ticket.id, admin, OverrideAction::PauseToggle, "resolved"))
        .await
        .unwrap();

    let history = h.audit.history(ticket.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.action == AuditAction::PauseToggle));
    assert!(!history[0].current.paused);
    assert!(history[1].current.paused);
}
