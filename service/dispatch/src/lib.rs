mod assign;
mod audit;
mod lifecycle;
mod notify;

#[rustfmt::skip]
pub use {
    assign::AssignmentServiceImpl,
    audit::AuditServiceImpl,
    lifecycle::TicketLifecycleServiceImpl,
    notify::NotificationServiceImpl,
};
