//! Channel for agents backed by a completion connector.

use crate::agent::domain::ChannelKind;
use crate::agent::{Agent, AgentProfile};
use crate::channel::ports::{
    Channel, ChannelCreationError, ChannelError, ChannelFactory, ChannelResult, MessageSink,
    TurnContext,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves [`AgentProfile::ChatCompletion`] agents.
///
/// The connector each agent carries does the provider work; this channel
/// only checks the profile and drives the agent, so a single instance can
/// serve agents bound to different connectors.
#[derive(Debug, Clone)]
pub struct ChatCompletionChannel {
    kind: ChannelKind,
}

impl ChatCompletionChannel {
    /// Creates a channel of kind `chat_completion`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kind(ChannelKind::chat_completion())
    }

    /// Creates a channel registered under a custom kind.
    #[must_use]
    pub const fn with_kind(kind: ChannelKind) -> Self {
        Self { kind }
    }
}

impl Default for ChatCompletionChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for ChatCompletionChannel {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn receive(
        &self,
        agent: &Agent,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()> {
        if !matches!(agent.profile(), AgentProfile::ChatCompletion(_)) {
            return Err(ChannelError::IncompatibleAgent {
                kind: self.kind.clone(),
                agent: agent.id(),
            });
        }
        agent.invoke(ctx, sink).await
    }
}

/// Factory for [`ChatCompletionChannel`].
#[derive(Debug, Clone)]
pub struct ChatCompletionChannelFactory {
    kind: ChannelKind,
}

impl ChatCompletionChannelFactory {
    /// Creates a factory for kind `chat_completion`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kind(ChannelKind::chat_completion())
    }

    /// Creates a factory serving chat-completion agents under a custom kind.
    #[must_use]
    pub const fn with_kind(kind: ChannelKind) -> Self {
        Self { kind }
    }
}

impl Default for ChatCompletionChannelFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelFactory for ChatCompletionChannelFactory {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn create(&self, _agent: &Agent) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        Ok(Arc::new(ChatCompletionChannel::with_kind(self.kind.clone())))
    }
}
