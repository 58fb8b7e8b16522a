//! Channel kind tag declared by every agent.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const CHAT_COMPLETION: &str = "chat_completion";
const SCRIPTED: &str = "scripted";

/// Stable tag naming the channel implementation that can service an agent.
///
/// Tags are lowercase `[a-z0-9_]` strings so they stay stable across
/// processes. Agents sharing a tag share one channel per nexus.
///
/// # Examples
///
/// ```
/// use colloquy::agent::domain::ChannelKind;
///
/// let kind = ChannelKind::new("  Tool_Chat ").expect("valid kind");
/// assert_eq!(kind.as_str(), "tool_chat");
/// assert_eq!(ChannelKind::chat_completion().as_str(), "chat_completion");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelKind(String);

impl ChannelKind {
    /// Creates a validated channel kind, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyChannelKind`] for blank input or
    /// [`AgentDomainError::InvalidChannelKind`] for characters outside
    /// `[a-z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyChannelKind);
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !is_valid {
            return Err(AgentDomainError::InvalidChannelKind(raw));
        }
        Ok(Self(normalized))
    }

    /// Kind served by the built-in chat-completion channel.
    #[must_use]
    pub fn chat_completion() -> Self {
        Self(CHAT_COMPLETION.to_owned())
    }

    /// Kind served by the built-in scripted channel.
    #[must_use]
    pub fn scripted() -> Self {
        Self(SCRIPTED.to_owned())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ChannelKind {
    type Error = AgentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChannelKind> for String {
    fn from(kind: ChannelKind) -> Self {
        kind.0
    }
}
