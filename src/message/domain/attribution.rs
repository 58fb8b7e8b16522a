//! String form of message source attribution.
//!
//! [`Message::source`](super::Message::source) is the authoritative
//! attribution. The token exists for consumers that can only carry a string
//! alongside provider-shaped payloads (for example a message `name` field)
//! and need to recover authorship from it later.

use crate::agent::domain::AgentId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

const PREFIX: &str = "agent";

/// Serialisable attribution token: `agent:<uuid>` or `agent:<uuid>:<name>`.
///
/// # Examples
///
/// ```
/// use colloquy::agent::domain::AgentId;
/// use colloquy::message::domain::AttributionToken;
///
/// let id = AgentId::new();
/// let token = AttributionToken::new(id).with_name("critic");
/// let parsed: AttributionToken = token.to_string().parse().expect("round trip");
/// assert_eq!(parsed.agent_id(), id);
/// assert_eq!(parsed.name(), Some("critic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttributionToken {
    agent_id: AgentId,
    name: Option<String>,
}

impl AttributionToken {
    /// Creates a token carrying only the agent id.
    #[must_use]
    pub const fn new(agent_id: AgentId) -> Self {
        Self {
            agent_id,
            name: None,
        }
    }

    /// Adds the agent's display name. Blank names are ignored.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let raw = name.into();
        let trimmed = raw.trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the originating agent id.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Returns the embedded display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for AttributionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{PREFIX}:{}:{name}", self.agent_id),
            None => write!(f, "{PREFIX}:{}", self.agent_id),
        }
    }
}

/// Error returned for strings that are not attribution tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed attribution token: {0}")]
pub struct ParseAttributionError(pub String);

impl FromStr for AttributionToken {
    type Err = ParseAttributionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseAttributionError(value.to_owned());
        let mut segments = value.splitn(3, ':');

        if segments.next() != Some(PREFIX) {
            return Err(malformed());
        }
        let uuid = segments
            .next()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .filter(|uuid| !uuid.is_nil())
            .ok_or_else(malformed)?;

        let token = Self::new(AgentId::from_uuid(uuid));
        Ok(match segments.next() {
            Some(name) => token.with_name(name),
            None => token,
        })
    }
}

impl TryFrom<String> for AttributionToken {
    type Error = ParseAttributionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttributionToken> for String {
    fn from(token: AttributionToken) -> Self {
        token.to_string()
    }
}
