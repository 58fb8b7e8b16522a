//! Agent identity: who an agent is and which channel kind serves it.

use super::{AgentId, AgentName, ChannelKind};
use serde::{Deserialize, Serialize};

/// Identity of a conversation participant.
///
/// The id is generated at construction and never changes, so two identities
/// built from the same name are still different participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    id: AgentId,
    name: AgentName,
    description: String,
    channel_kind: ChannelKind,
}

impl AgentIdentity {
    /// Creates an identity with a fresh id and an empty description.
    #[must_use]
    pub fn new(name: AgentName, channel_kind: ChannelKind) -> Self {
        Self {
            id: AgentId::new(),
            name,
            description: String::new(),
            channel_kind,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the channel kind.
    #[must_use]
    pub fn with_channel_kind(mut self, channel_kind: ChannelKind) -> Self {
        self.channel_kind = channel_kind;
        self
    }

    /// Returns the agent id.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the channel kind tag.
    #[must_use]
    pub const fn channel_kind(&self) -> &ChannelKind {
        &self.channel_kind
    }
}
