mod assign;
mod audit;
mod lifecycle;
mod notify;
mod publisher;

#[rustfmt::skip]
pub use {
    assign::AssignmentService,
    audit::AuditService,
    lifecycle::TicketLifecycleService,
    notify::NotificationService,
    publisher::EventPublisher,
};
