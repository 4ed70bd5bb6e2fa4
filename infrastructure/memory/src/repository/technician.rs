use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_dispatch::model::entity::technician::{Technician, TechnicianRole};
use domain_dispatch::repository::TechnicianRepo;
use uuid::Uuid;

use crate::store::MemoryStore;

#[async_trait]
impl TechnicianRepo for MemoryStore {
    async fn insert(&self, technician: &Technician) -> anyhow::Result<()> {
        self.technicians.insert(technician.id, technician.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Technician>> {
        Ok(self.technicians.get(&id).map(|t| t.clone()))
    }

    async fn update(&self, technician: &Technician) -> anyhow::Result<()> {
        match self.technicians.get_mut(&technician.id) {
            Some(mut slot) => {
                *slot = technician.clone();
                Ok(())
            }
            None => anyhow::bail!("technician {} does not exist", technician.id),
        }
    }

    async fn acquire_round_robin(
        &self,
        role: TechnicianRole,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Technician>> {
        // Selection and stamp are one unit under this lock.
        let _guard = self.assign_lock.lock().await;

        let mut best: Option<Technician> = None;
        for candidate in self.technicians.iter() {
            if !candidate.is_eligible(role) {
                continue;
            }
            // Never-assigned sorts before any stamp; ties break by id.
            let is_better = match &best {
                None => true,
                Some(current) => {
                    (candidate.last_assigned_at, candidate.id)
                        < (current.last_assigned_at, current.id)
                }
            };
            if is_better {
                best = Some(candidate.clone());
            }
        }

        if let Some(chosen) = best.as_mut() {
            chosen.last_assigned_at = Some(now);
            self.technicians.insert(chosen.id, chosen.clone());
        }
        Ok(best)
    }

    async fn stamp_assignment(&self, id: Uuid, now: DateTime<Utc>) -> anyhow::Result<()> {
        match self.technicians.get_mut(&id) {
            Some(mut slot) => {
                slot.last_assigned_at = Some(now);
                Ok(())
            }
            None => anyhow::bail!("technician {id} does not exist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn technician(name: &str, last_assigned_at: Option<DateTime<Utc>>) -> Technician {
        Technician {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            role: TechnicianRole::FieldDispatch,
            online: true,
            available: true,
            last_assigned_at,
        }
    }

    #[tokio::test]
    async fn never_assigned_wins_over_recently_assigned() {
        let store = MemoryStore::new();
        let fresh = technician("fresh", None);
        let stale = technician("stale", Some(Utc::now()));
        store.insert(&fresh).await.unwrap();
        store.insert(&stale).await.unwrap();

        let chosen = store
            .acquire_round_robin(TechnicianRole::FieldDispatch, Utc::now())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id, fresh.id);
        // The stamp happened inside the acquire.
        let stored = store.get_by_id(fresh.id).await.unwrap().unwrap();
        assert!(stored.last_assigned_at.is_some());
    }

    #[tokio::test]
    async fn offline_and_unavailable_are_filtered() {
        let store = MemoryStore::new();
        let mut offline = technician("offline", None);
        offline.online = false;
        let mut busy = technician("busy", None);
        busy.available = false;
        store.insert(&offline).await.unwrap();
        store.insert(&busy).await.unwrap();

        let chosen = store
            .acquire_round_robin(TechnicianRole::FieldDispatch, Utc::now())
            .await
            .unwrap();
        assert!(chosen.is_none());
    }

    #[tokio::test]
    async fn concurrent_acquires_pick_distinct_technicians() {
        let store = Arc::new(MemoryStore::new());
        store.insert(&technician("a", None)).await.unwrap();
        store.insert(&technician("b", None)).await.unwrap();

        let (s1, s2) = (store.clone(), store.clone());
        let (r1, r2) = tokio::join!(
            tokio::spawn(async move {
                s1.acquire_round_robin(TechnicianRole::FieldDispatch, Utc::now()).await.unwrap()
            }),
            tokio::spawn(async move {
                s2.acquire_round_robin(TechnicianRole::FieldDispatch, Utc::now()).await.unwrap()
            }),
        );
        let (r1, r2) = (r1.unwrap().unwrap(), r2.unwrap().unwrap());
        assert_ne!(r1.id, r2.id, "two sweeps must never pick the same technician");
    }
}
