pub mod audit_log;
pub mod notification;
pub mod settings;
pub mod technician;
pub mod ticket;
pub mod user;

#[rustfmt::skip]
pub use {
    audit_log::AuditLogEntry,
    notification::Notification,
    settings::SystemSettings,
    technician::Technician,
    ticket::Ticket,
    user::User,
};
