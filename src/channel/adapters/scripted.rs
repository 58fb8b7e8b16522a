//! Channel for scripted agents.

use crate::agent::domain::ChannelKind;
use crate::agent::{Agent, AgentProfile};
use crate::channel::ports::{
    Channel, ChannelCreationError, ChannelError, ChannelFactory, ChannelResult, MessageSink,
    TurnContext,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves [`AgentProfile::Scripted`] agents.
#[derive(Debug, Clone)]
pub struct ScriptedChannel {
    kind: ChannelKind,
}

impl ScriptedChannel {
    /// Creates a channel of kind `scripted`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: ChannelKind::scripted(),
        }
    }
}

impl Default for ScriptedChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for ScriptedChannel {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn receive(
        &self,
        agent: &Agent,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()> {
        match agent.profile() {
            AgentProfile::Scripted(_) => agent.invoke(ctx, sink).await,
            AgentProfile::ChatCompletion(_) => Err(ChannelError::IncompatibleAgent {
                kind: self.kind.clone(),
                agent: agent.id(),
            }),
        }
    }
}

/// Factory for [`ScriptedChannel`].
#[derive(Debug, Clone)]
pub struct ScriptedChannelFactory {
    kind: ChannelKind,
}

impl ScriptedChannelFactory {
    /// Creates the factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: ChannelKind::scripted(),
        }
    }
}

impl Default for ScriptedChannelFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelFactory for ScriptedChannelFactory {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn create(&self, _agent: &Agent) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        Ok(Arc::new(ScriptedChannel::new()))
    }
}
