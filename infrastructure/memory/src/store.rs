use dashmap::DashMap;
use domain_dispatch::model::entity::{
    AuditLogEntry, Notification, SystemSettings, Technician, Ticket, User,
};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Single-node backing store. Dashmap entry locks give each record the
/// atomic read-modify-write the engine assumes; the audit log is an
/// append-only vector behind a lock that no code path ever truncates.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) tickets: DashMap<Uuid, Ticket>,
    pub(crate) technicians: DashMap<Uuid, Technician>,
    pub(crate) users: DashMap<Uuid, User>,
    pub(crate) audit_log: RwLock<Vec<AuditLogEntry>>,
    pub(crate) notifications: DashMap<Uuid, Notification>,
    pub(crate) settings: RwLock<SystemSettings>,
    /// Serializes round-robin select-and-stamp so two concurrent sweeps
    /// can not pick the same least-recently-assigned technician.
    pub(crate) assign_lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
