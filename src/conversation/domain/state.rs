//! The shared, append-only message log.

use super::ConversationSnapshot;
use crate::message::domain::Message;
use std::sync::Arc;

/// Ordered history shared by every participant of one nexus.
///
/// Messages are stored behind `Arc` so snapshots handed to channels share
/// them instead of cloning. Appending is reserved to the owning nexus.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<Arc<Message>>,
}

impl ConversationState {
    /// Creates an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when no message has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().map(AsRef::as_ref)
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last().map(AsRef::as_ref)
    }

    /// Takes an immutable view of the current history.
    #[must_use]
    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot::from_shared(self.messages.iter().cloned().collect())
    }

    pub(crate) fn append(&mut self, message: Message) -> Arc<Message> {
        let shared = Arc::new(message);
        self.messages.push(Arc::clone(&shared));
        shared
    }
}
