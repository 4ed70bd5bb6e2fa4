use async_trait::async_trait;
use domain_dispatch::model::entity::user::{ActorRole, User};
use domain_dispatch::repository::UserRepo;
use uuid::Uuid;

use crate::store::MemoryStore;

#[async_trait]
impl UserRepo for MemoryStore {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn list_ids_by_role(&self, role: ActorRole) -> anyhow::Result<Vec<Uuid>> {
        Ok(self.users.iter().filter(|u| u.role == role).map(|u| u.id).collect())
    }
}
