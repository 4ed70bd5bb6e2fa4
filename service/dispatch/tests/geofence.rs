mod common;

use common::*;
use domain_dispatch::exception::DispatchException;
use domain_dispatch::model::entity::technician::TechnicianRole;
use domain_dispatch::model::entity::ticket::{TicketKind, TicketStatus};
use domain_dispatch::model::vo::command::CompleteTicketCommand;
use domain_dispatch::model::vo::GeoPoint;
use domain_dispatch::repository::TicketRepo;
use domain_dispatch::service::TicketLifecycleService;
use uuid::Uuid;

async fn ticket_in_progress(h: &Harness, kind: TicketKind) -> (Uuid, Uuid) {
    let requester = seed_requester(h).await;
    let role = match kind {
        TicketKind::OnSite => TechnicianRole::FieldDispatch,
        TicketKind::Depot => TechnicianRole::Depot,
    };
    let tech = seed_technician(h, "t1", role).await;

    let mut cmd = create_cmd(requester);
    cmd.kind = kind;
    let ticket = h.lifecycle.create(cmd).await.unwrap();
    h.lifecycle.advance(ticket.id, tech, TicketStatus::Accepted).await.unwrap();
    h.lifecycle.advance(ticket.id, tech, TicketStatus::OnWay).await.unwrap();
    h.lifecycle.advance(ticket.id, tech, TicketStatus::InProgress).await.unwrap();
    (ticket.id, tech)
}

fn complete_cmd(ticket_id: Uuid, actor_id: Uuid, position: Option<GeoPoint>) -> CompleteTicketCommand {
    CompleteTicketCommand {
        ticket_id,
        actor_id,
        position,
        remarks: None,
        replaced_parts: None,
        image_urls: vec![],
        voice_urls: vec![],
    }
}

#[tokio::test]
async fn field_completion_succeeds_inside_the_fence() {
    let h = harness();
    let (ticket_id, tech) = ticket_in_progress(&h, TicketKind::OnSite).await;

    let position = Some(point_at_meters_north(BASE, 99.0));
    let ticket = h.lifecycle.complete(complete_cmd(ticket_id, tech, position)).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Completed);
}

#[tokio::test]
async fn field_completion_fails_outside_the_fence() {
    let h = harness();
    let (ticket_id, tech) = ticket_in_progress(&h, TicketKind::OnSite).await;

    let position = Some(point_at_meters_north(BASE, 101.0));
    let err = h.lifecycle.complete(complete_cmd(ticket_id, tech, position)).await.unwrap_err();
    match err {
        DispatchException::OutsideGeofence { distance, limit } => {
            assert!(distance > limit);
            assert!((distance - 101.0).abs() < 0.5, "got {distance}");
        }
        other => panic!("expected geofence rejection, got {other}"),
    }
    // No state change on rejection.
    let stored = TicketRepo::get_by_id(h.store.as_ref(), ticket_id).await.unwrap().unwrap();
    assert_eq!(stored.status, TicketStatus::InProgress);
    assert!(stored.completed_at.is_none());
}

#[tokio::test]
async fn field_completion_without_a_fix_fails_closed() {
    let h = harness();
    let (ticket_id, tech) = ticket_in_progress(&h, TicketKind::OnSite).await;

    let err = h.lifecycle.complete(complete_cmd(ticket_id, tech, None)).await.unwrap_err();
    assert!(matches!(err, DispatchException::PositionUnavailable));
}

#[tokio::test]
async fn depot_technicians_are_exempt() {
    let h = harness();
    let (ticket_id, tech) = ticket_in_progress(&h, TicketKind::Depot).await;

    let ticket = h.lifecycle.complete(complete_cmd(ticket_id, tech, None)).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Completed);
}
