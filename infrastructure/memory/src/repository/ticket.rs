use async_trait::async_trait;
use domain_dispatch::model::entity::ticket::TicketStatus;
use domain_dispatch::model::entity::Ticket;
use domain_dispatch::repository::TicketRepo;
use uuid::Uuid;

use crate::store::MemoryStore;

#[async_trait]
impl TicketRepo for MemoryStore {
    async fn insert(&self, ticket: &Ticket) -> anyhow::Result<()> {
        self.tickets.insert(ticket.id, ticket.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>> {
        Ok(self.tickets.get(&id).map(|t| t.clone()))
    }

    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()> {
        match self.tickets.get_mut(&ticket.id) {
            Some(mut slot) => {
                *slot = ticket.clone();
                Ok(())
            }
            None => anyhow::bail!("ticket {} does not exist", ticket.id),
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.tickets.remove(&id).is_some())
    }

    async fn assign_if_unassigned(&self, id: Uuid, technician_id: Uuid) -> anyhow::Result<bool> {
        // Entry lock makes the check-and-set one atomic step.
        let Some(mut slot) = self.tickets.get_mut(&id) else {
            return Ok(false);
        };
        if slot.technician_id.is_some() {
            return Ok(false);
        }
        slot.technician_id = Some(technician_id);
        Ok(true)
    }

    async fn clear_assignments(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>> {
        let mut cleared = Vec::new();
        for mut slot in self.tickets.iter_mut() {
            if slot.technician_id == Some(technician_id) && !slot.status.is_terminal() {
                slot.technician_id = None;
                cleared.push(slot.clone());
            }
        }
        Ok(cleared)
    }

    async fn list_unassigned_pending(&self) -> anyhow::Result<Vec<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.technician_id.is_none() && t.status == TicketStatus::Pending)
            .map(|t| t.clone())
            .collect())
    }
}
