//! The immutable unit of conversation history.

use super::{AttributionToken, ContentPart, MessageId, MessageMetadata, Role};
use crate::agent::domain::AgentId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message in a shared conversation.
///
/// # Invariants
///
/// - `content` holds at least one part (enforced at construction)
/// - there are no setters; attribution is the only field that can be filled
///   in after construction, and only by consuming the message
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::{ContentPart, Message, Role};
/// use mockable::DefaultClock;
///
/// let message = Message::new(Role::User, vec![ContentPart::text("Hello!")], &DefaultClock)
///     .expect("valid message");
/// assert_eq!(message.role(), Role::User);
/// assert!(message.source().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: Vec<ContentPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<AgentId>,
    #[serde(default, skip_serializing_if = "MessageMetadata::is_empty")]
    metadata: MessageMetadata,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates an unattributed message stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if `content` is empty.
    pub fn new(
        role: Role,
        content: Vec<ContentPart>,
        clock: &(impl Clock + ?Sized),
    ) -> Result<Self, MessageBuilderError> {
        Self::builder(role).with_content_parts(content).build(clock)
    }

    /// Creates a single-part text message.
    ///
    /// Never fails: a text part is always present, even if blank. Blank text
    /// is caught later by validation.
    #[must_use]
    pub fn text(role: Role, text: impl Into<String>, clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: vec![ContentPart::text(text)],
            source: None,
            metadata: MessageMetadata::empty(),
            created_at: clock.utc(),
        }
    }

    /// Returns a builder for messages with attribution or metadata.
    #[must_use]
    pub fn builder(role: Role) -> MessageBuilder {
        MessageBuilder::new(role)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the author role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the content parts.
    #[must_use]
    pub fn content(&self) -> &[ContentPart] {
        &self.content
    }

    /// Returns the originating agent, if attributed.
    #[must_use]
    pub const fn source(&self) -> Option<AgentId> {
        self.source
    }

    /// Returns the metadata.
    #[must_use]
    pub const fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` for an agent's one-time priming message.
    #[must_use]
    pub const fn is_priming(&self) -> bool {
        self.metadata.priming
    }

    /// Concatenates all text parts, separated by newlines.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the message with `metadata` in place of its current metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the string-carriable attribution for this message.
    ///
    /// Built from [`Message::source`] and the author name in the metadata.
    /// Unattributed messages have none.
    #[must_use]
    pub fn attribution_token(&self) -> Option<AttributionToken> {
        let name = self.metadata.author_name.as_deref().unwrap_or_default();
        Some(AttributionToken::new(self.source?).with_name(name))
    }

    /// Returns the message attributed to `agent` if it carries no source yet.
    ///
    /// An existing attribution is never overwritten.
    #[must_use]
    pub fn attributed_to(mut self, agent: AgentId) -> Self {
        if self.source.is_none() {
            self.source = Some(agent);
        }
        self
    }
}

/// Builder for [`Message`].
#[derive(Debug)]
pub struct MessageBuilder {
    id: Option<MessageId>,
    role: Role,
    content: Vec<ContentPart>,
    source: Option<AgentId>,
    metadata: MessageMetadata,
}

impl MessageBuilder {
    /// Creates a builder for the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            id: None,
            role,
            content: Vec::new(),
            source: None,
            metadata: MessageMetadata::empty(),
        }
    }

    /// Uses a specific message id instead of a random one.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a content part.
    #[must_use]
    pub fn with_content(mut self, part: ContentPart) -> Self {
        self.content.push(part);
        self
    }

    /// Appends several content parts.
    #[must_use]
    pub fn with_content_parts(mut self, parts: impl IntoIterator<Item = ContentPart>) -> Self {
        self.content.extend(parts);
        self
    }

    /// Attributes the message to an agent.
    #[must_use]
    pub const fn with_source(mut self, agent: AgentId) -> Self {
        self.source = Some(agent);
        self
    }

    /// Replaces the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builds the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if no part was added.
    pub fn build(self, clock: &(impl Clock + ?Sized)) -> Result<Message, MessageBuilderError> {
        if self.content.is_empty() {
            return Err(MessageBuilderError::EmptyContent);
        }

        Ok(Message {
            id: self.id.unwrap_or_default(),
            role: self.role,
            content: self.content,
            source: self.source,
            metadata: self.metadata,
            created_at: clock.utc(),
        })
    }
}

/// Errors that can occur when building a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageBuilderError {
    /// The message content is empty.
    #[error("message must contain at least one content part")]
    EmptyContent,
}
