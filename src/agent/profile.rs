//! Kind-specific agent configuration.

use crate::agent::domain::{ChannelKind, ExecutionSettings};
use crate::agent::ports::CompletionService;
use crate::message::domain::Role;
use std::fmt;
use std::sync::Arc;

/// How an agent produces its messages.
///
/// The nexus never matches on this; it only reads the agent's channel kind.
/// Channels match on it to decide whether they can serve an agent.
#[derive(Debug, Clone)]
pub enum AgentProfile {
    /// Backed by a chat-completion connector.
    ChatCompletion(ChatCompletionProfile),
    /// Replays a fixed script.
    Scripted(ScriptedProfile),
}

impl AgentProfile {
    /// Channel kind that services this profile unless overridden.
    #[must_use]
    pub fn default_channel_kind(&self) -> ChannelKind {
        match self {
            Self::ChatCompletion(_) => ChannelKind::chat_completion(),
            Self::Scripted(_) => ChannelKind::scripted(),
        }
    }

    /// Returns the agent's standing instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        match self {
            Self::ChatCompletion(profile) => profile.instructions(),
            Self::Scripted(profile) => profile.instructions(),
        }
    }
}

impl From<ChatCompletionProfile> for AgentProfile {
    fn from(profile: ChatCompletionProfile) -> Self {
        Self::ChatCompletion(profile)
    }
}

impl From<ScriptedProfile> for AgentProfile {
    fn from(profile: ScriptedProfile) -> Self {
        Self::Scripted(profile)
    }
}

/// Instructions and settings bound to a completion connector.
#[derive(Clone)]
pub struct ChatCompletionProfile {
    instructions: Option<String>,
    settings: ExecutionSettings,
    service: Arc<dyn CompletionService>,
}

impl ChatCompletionProfile {
    /// Creates a profile with default settings and no instructions.
    #[must_use]
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            instructions: None,
            settings: ExecutionSettings::default(),
            service,
        }
    }

    /// Sets the standing instructions injected on the agent's first turn.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Replaces the execution settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ExecutionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the instructions.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns the execution settings.
    #[must_use]
    pub const fn settings(&self) -> &ExecutionSettings {
        &self.settings
    }

    /// Returns the connector.
    #[must_use]
    pub fn service(&self) -> &Arc<dyn CompletionService> {
        &self.service
    }
}

impl fmt::Debug for ChatCompletionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionProfile")
            .field("instructions", &self.instructions)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// A fixed list of replies, one per turn.
///
/// The reply for a turn is chosen by counting the agent's own messages in
/// the shared history, so the profile itself never changes. Once the script
/// runs out the agent produces nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedProfile {
    role: Role,
    instructions: Option<String>,
    replies: Vec<String>,
}

impl ScriptedProfile {
    /// Creates an assistant script.
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            role: Role::Assistant,
            instructions: None,
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the role of produced messages, for example [`Role::User`] for a
    /// human proxy.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the standing instructions injected on the agent's first turn.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Returns the role of produced messages.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the instructions.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns the full script.
    #[must_use]
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Returns the reply for the turn after `authored` previous replies.
    #[must_use]
    pub fn reply_after(&self, authored: usize) -> Option<&str> {
        self.replies.get(authored).map(String::as_str)
    }
}
