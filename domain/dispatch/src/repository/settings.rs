use async_trait::async_trait;

use crate::model::entity::SystemSettings;

#[async_trait]
pub trait SettingsRepo: Send + Sync {
    /// Always a fresh read; callers must not cache across assignment
    /// attempts.
    async fn get(&self) -> anyhow::Result<SystemSettings>;

    /// Toggle auto-assignment, bumping the settings version.
    async fn set_auto_assign(&self, enabled: bool) -> anyhow::Result<SystemSettings>;
}
