use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::entity::technician::{Technician, TechnicianRole};

#[async_trait]
pub trait TechnicianRepo: Send + Sync {
    async fn insert(&self, technician: &Technician) -> anyhow::Result<()>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>>;

    async fn update(&self, technician: &Technician) -> anyhow::Result<()>;

    /// Round-robin selection: the eligible technician of the given role
    /// with the oldest `last_assigned_at` (never-assigned first, ties by
    /// id), with the `last_assigned_at` stamp applied in the same atomic
    /// step so concurrent sweeps cannot pick the same technician.
    async fn acquire_round_robin(
        &self,
        role: TechnicianRole,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Technician>>;

    /// Stamp `last_assigned_at` after a manual assignment.
    async fn stamp_assignment(&self, id: Uuid, now: DateTime<Utc>) -> anyhow::Result<()>;
}
