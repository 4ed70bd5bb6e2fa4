use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use domain_dispatch::model::entity::Notification;
use domain_dispatch::repository::NotificationRepo;
use uuid::Uuid;

use crate::store::MemoryStore;

#[async_trait]
impl NotificationRepo for MemoryStore {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<bool> {
        match self.notifications.entry(notification.id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(notification.clone());
                Ok(true)
            }
        }
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Notification>> {
        Ok(self.notifications.get(&id).map(|n| n.clone()))
    }

    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>> {
        let mut list: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id)
            .map(|n| n.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn mark_read(&self, id: Uuid) -> anyhow::Result<bool> {
        match self.notifications.get_mut(&id) {
            Some(mut slot) if !slot.read => {
                slot.read = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<usize> {
        let mut marked = 0;
        for mut slot in self.notifications.iter_mut() {
            if slot.recipient_id == user_id && !slot.read {
                slot.read = true;
                marked += 1;
            }
        }
        Ok(marked)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.notifications.remove(&id).is_some())
    }

    async fn delete_all(&self, user_id: Uuid) -> anyhow::Result<usize> {
        let ids: Vec<Uuid> = self
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id)
            .map(|n| n.id)
            .collect();
        let mut removed = 0;
        for id in ids {
            if self.notifications.remove(&id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
