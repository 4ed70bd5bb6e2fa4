mod audit_log;
mod notification;
mod settings;
mod technician;
mod ticket;
mod user;
