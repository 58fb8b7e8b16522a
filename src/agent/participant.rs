//! The agent: identity plus the behaviour behind a turn.

use crate::agent::domain::{AgentId, AgentIdentity, AgentName, ChannelKind};
use crate::agent::ports::{Completion, CompletionError, CompletionOutput, CompletionRequest};
use crate::agent::profile::{AgentProfile, ChatCompletionProfile, ScriptedProfile};
use crate::channel::ports::{
    Channel, ChannelCreationError, ChannelResult, MessageSink, TurnContext,
};
use crate::channel::services::ChannelRegistry;
use crate::message::domain::{ContentPart, Message, MessageMetadata, Role};
use futures::StreamExt;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// A conversation participant.
///
/// # Examples
///
/// ```
/// use colloquy::agent::{Agent, ScriptedProfile};
/// use colloquy::agent::domain::{AgentName, ChannelKind};
///
/// let name = AgentName::new("critic").expect("valid name");
/// let agent = Agent::new(name, ScriptedProfile::new(["Critique of v1"]))
///     .with_description("Reviews drafts");
/// assert_eq!(agent.name().as_str(), "critic");
/// assert_eq!(agent.channel_kind(), &ChannelKind::scripted());
/// ```
#[derive(Debug, Clone)]
pub struct Agent {
    identity: AgentIdentity,
    profile: AgentProfile,
}

impl Agent {
    /// Creates an agent with a fresh id, served by the profile's default
    /// channel kind.
    #[must_use]
    pub fn new(name: AgentName, profile: impl Into<AgentProfile>) -> Self {
        let agent_profile = profile.into();
        let identity = AgentIdentity::new(name, agent_profile.default_channel_kind());
        Self {
            identity,
            profile: agent_profile,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.identity = self.identity.with_description(description);
        self
    }

    /// Routes the agent to a different channel kind.
    #[must_use]
    pub fn with_channel_kind(mut self, channel_kind: ChannelKind) -> Self {
        self.identity = self.identity.with_channel_kind(channel_kind);
        self
    }

    /// Returns the agent id.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.identity.id()
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        self.identity.name()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.identity.description()
    }

    /// Returns the channel kind that services this agent.
    #[must_use]
    pub const fn channel_kind(&self) -> &ChannelKind {
        self.identity.channel_kind()
    }

    /// Returns the full identity.
    #[must_use]
    pub const fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    /// Returns the kind-specific profile.
    #[must_use]
    pub const fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Asks the registry's factory for this agent's kind to build a channel.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelCreationError::UnknownKind`] when no factory serves
    /// the kind, or whatever the factory reports.
    pub async fn create_channel(
        &self,
        registry: &ChannelRegistry,
    ) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        registry.create(self).await
    }

    /// Builds the one-time system message carrying this agent's
    /// instructions. Agents without instructions have none.
    #[must_use]
    pub fn priming_message(&self, clock: &(impl Clock + ?Sized)) -> Option<Message> {
        let instructions = self
            .profile
            .instructions()
            .filter(|text| !text.trim().is_empty())?;
        let message = Message::text(Role::System, instructions, clock)
            .attributed_to(self.id())
            .with_metadata(self.author_metadata().as_priming());
        Some(message)
    }

    /// Produces this agent's messages for one turn.
    ///
    /// Every message pushed into `sink` is attributed to this agent.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Completion`](crate::channel::ports::ChannelError::Completion)
    /// when the connector fails or answers with an unusable completion, and
    /// [`ChannelError::SinkClosed`](crate::channel::ports::ChannelError::SinkClosed)
    /// when the consumer stops listening.
    pub async fn invoke(&self, ctx: TurnContext<'_>, sink: &MessageSink) -> ChannelResult<()> {
        match &self.profile {
            AgentProfile::ChatCompletion(profile) => self.complete(profile, ctx, sink).await,
            AgentProfile::Scripted(profile) => self.recite(profile, ctx, sink).await,
        }
    }

    async fn complete(
        &self,
        profile: &ChatCompletionProfile,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()> {
        let request = CompletionRequest {
            agent: self.id(),
            history: ctx.history.history_for(self.id()),
            settings: profile.settings().clone(),
        };
        debug!(
            agent_id = %self.id(),
            history_len = request.history.len(),
            "requesting completion"
        );

        match profile.service().complete(request).await? {
            CompletionOutput::Batch(completions) => {
                for completion in completions {
                    sink.send(self.completion_message(completion, ctx.clock)?).await?;
                }
            }
            CompletionOutput::Stream(mut stream) => {
                while let Some(item) = stream.next().await {
                    sink.send(self.completion_message(item?, ctx.clock)?).await?;
                }
            }
        }
        Ok(())
    }

    async fn recite(
        &self,
        profile: &ScriptedProfile,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()> {
        let authored = ctx.history.authored_by(self.id());
        let Some(reply) = profile.reply_after(authored) else {
            debug!(agent_id = %self.id(), authored, "script exhausted");
            return Ok(());
        };
        let message = Message::builder(profile.role())
            .with_content(ContentPart::text(reply))
            .with_source(self.id())
            .with_metadata(self.author_metadata())
            .build(ctx.clock)
            .map_err(|err| CompletionError::malformed(err.to_string()))?;
        sink.send(message).await
    }

    fn completion_message(
        &self,
        completion: Completion,
        clock: &(dyn Clock + Send + Sync),
    ) -> Result<Message, CompletionError> {
        let metadata = completion
            .extensions
            .into_iter()
            .fold(self.author_metadata(), |acc, (key, value)| {
                acc.with_extension(key, value)
            });
        Message::builder(completion.role)
            .with_content_parts(completion.content)
            .with_source(self.id())
            .with_metadata(metadata)
            .build(clock)
            .map_err(|err| CompletionError::malformed(err.to_string()))
    }

    fn author_metadata(&self) -> MessageMetadata {
        MessageMetadata::with_author_name(self.name().as_str())
    }
}
