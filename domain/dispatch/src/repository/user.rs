use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::user::{ActorRole, User};

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Current members of a role, used to expand role broadcasts at send
    /// time.
    async fn list_ids_by_role(&self, role: ActorRole) -> anyhow::Result<Vec<Uuid>>;
}
