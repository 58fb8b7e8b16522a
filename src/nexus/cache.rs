//! Per-nexus channel cache.

use crate::agent::Agent;
use crate::agent::domain::ChannelKind;
use crate::channel::ports::{Channel, ChannelCreationError};
use crate::channel::services::ChannelRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// At most one live channel per kind.
///
/// Lookup and creation happen under one lock, so concurrent first uses of a
/// kind still create a single channel. Failed creations leave no entry.
#[derive(Default)]
pub(crate) struct ChannelCache {
    channels: Mutex<HashMap<ChannelKind, Arc<dyn Channel>>>,
}

impl ChannelCache {
    pub(crate) async fn get_or_create(
        &self,
        agent: &Agent,
        registry: &ChannelRegistry,
    ) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        let mut channels = self.channels.lock().await;
        if let Some(cached) = channels.get(agent.channel_kind()) {
            return Ok(Arc::clone(cached));
        }

        let created = agent.create_channel(registry).await?;
        info!(
            agent_id = %agent.id(),
            channel_kind = %agent.channel_kind(),
            "created channel"
        );
        channels.insert(agent.channel_kind().clone(), Arc::clone(&created));
        Ok(created)
    }

    pub(crate) async fn kinds(&self) -> Vec<ChannelKind> {
        let channels = self.channels.lock().await;
        let mut kinds: Vec<_> = channels.keys().cloned().collect();
        kinds.sort_by(|left, right| left.as_str().cmp(right.as_str()));
        kinds
    }

    pub(crate) async fn clear(&self) {
        self.channels.lock().await.clear();
    }
}
