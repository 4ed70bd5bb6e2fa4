use async_trait::async_trait;
use dashmap::DashMap;
use domain_dispatch::service::EventPublisher;
use serde::Serialize;

/// In-process topic bus. Each publish clones the event into every live
/// subscriber of the topic; subscribers whose receiver was dropped are
/// pruned on the next publish. Delivery is at-least-once and ordered per
/// topic only.
#[derive(Default)]
pub struct InMemoryEventBus {
    topics: DashMap<String, Vec<flume::Sender<serde_json::Value>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: &str) -> flume::Receiver<serde_json::Value> {
        let (tx, rx) = flume::unbounded();
        self.topics.entry(topic.to_owned()).or_default().push(tx);
        rx
    }
}

#[async_trait]
impl<T> EventPublisher<T> for InMemoryEventBus
where
    T: Serialize + Send + Sync + 'static,
{
    async fn publish(&self, msg: &T, topic: &str) -> anyhow::Result<()> {
        let value = serde_json::to_value(msg)?;
        if let Some(mut senders) = self.topics.get_mut(topic) {
            senders.retain(|tx| tx.send(value.clone()).is_ok());
        }
        Ok(())
    }
}
