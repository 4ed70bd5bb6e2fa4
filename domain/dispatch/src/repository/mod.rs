mod audit_log;
mod notification;
mod settings;
mod technician;
mod ticket;
mod user;

#[rustfmt::skip]
pub use {
    audit_log::AuditLogRepo,
    notification::NotificationRepo,
    settings::SettingsRepo,
    technician::TechnicianRepo,
    ticket::TicketRepo,
    user::UserRepo,
};
