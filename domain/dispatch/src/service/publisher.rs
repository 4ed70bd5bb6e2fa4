use async_trait::async_trait;

/// Publish side of the realtime channel, keyed by topic. Delivery is
/// at-least-once and best-effort; callers must not fail a committed
/// mutation on a publish error.
#[async_trait]
pub trait EventPublisher<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    async fn publish(&self, msg: &T, topic: &str) -> anyhow::Result<()>;
}
