//! Background eviction of idle sessions.

use std::sync::Arc;
use std::time::Duration;

use pathways_conversation::application::registry::SessionRegistry;
use pathways_core::clock::Clock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Spawns a task that evicts sessions idle for `idle_timeout`, checking
/// every `interval`.
pub fn spawn_idle_sweeper(
    registry: Arc<SessionRegistry>,
    clock: Arc<dyn Clock + Send + Sync>,
    idle_timeout: chrono::Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = registry.evict_idle(clock.as_ref(), idle_timeout).await;
            if evicted > 0 {
                info!(evicted, "evicted idle sessions");
            }
        }
    })
}
