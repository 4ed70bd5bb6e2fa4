use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Notification;

#[async_trait]
pub trait NotificationRepo: Send + Sync {
    /// Insert unless a record with the same id already exists (dedupe for
    /// at-least-once delivery). Returns whether a new record was stored.
    async fn insert(&self, notification: &Notification) -> anyhow::Result<bool>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Notification>>;

    /// A user's notifications, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;

    /// Returns whether the record existed and was unread.
    async fn mark_read(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<usize>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn delete_all(&self, user_id: Uuid) -> anyhow::Result<usize>;
}
