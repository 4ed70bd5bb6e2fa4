use async_trait::async_trait;
use domain_dispatch::model::entity::SystemSettings;
use domain_dispatch::repository::SettingsRepo;

use crate::store::MemoryStore;

#[async_trait]
impl SettingsRepo for MemoryStore {
    async fn get(&self) -> anyhow::Result<SystemSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn set_auto_assign(&self, enabled: bool) -> anyhow::Result<SystemSettings> {
        let mut settings = self.settings.write().await;
        settings.auto_assign_enabled = enabled;
        settings.version += 1;
        Ok(settings.clone())
    }
}
