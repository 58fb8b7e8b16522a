//! Read-only views of a conversation.

use super::{Authorship, HistoryEntry};
use crate::agent::domain::AgentId;
use crate::message::domain::Message;
use std::sync::Arc;

/// Immutable view of a conversation at one point in time.
///
/// Cloning a snapshot is cheap; later appends to the conversation are not
/// visible through it.
#[derive(Debug, Clone, Default)]
pub struct ConversationSnapshot {
    messages: Arc<[Arc<Message>]>,
}

impl ConversationSnapshot {
    /// Builds a snapshot from owned messages, oldest first.
    #[must_use]
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        Self::from_shared(messages.into_iter().map(Arc::new).collect())
    }

    pub(crate) const fn from_shared(messages: Arc<[Arc<Message>]>) -> Self {
        Self { messages }
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` for an empty snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the message at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index).map(AsRef::as_ref)
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last().map(AsRef::as_ref)
    }

    /// Iterates over the messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().map(AsRef::as_ref)
    }

    /// Clones the messages into an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Message> {
        self.iter().cloned().collect()
    }

    /// Counts the non-priming messages attributed to `agent`.
    #[must_use]
    pub fn authored_by(&self, agent: AgentId) -> usize {
        self.iter()
            .filter(|message| message.source() == Some(agent) && !message.is_priming())
            .count()
    }

    /// Presents the history from one agent's point of view.
    ///
    /// Every message is tagged with its [`Authorship`] relative to `agent`.
    /// Priming messages of other agents are left out, so one agent's
    /// instructions never reach another agent's prompt.
    #[must_use]
    pub fn history_for(&self, agent: AgentId) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .filter_map(|message| {
                let authorship = match message.source() {
                    Some(source) if source == agent => Authorship::Own,
                    Some(_) if message.is_priming() => return None,
                    Some(source) => Authorship::Peer(source),
                    None => Authorship::External,
                };
                Some(HistoryEntry::new(authorship, Arc::clone(message)))
            })
            .collect()
    }
}

impl From<Vec<Message>> for ConversationSnapshot {
    fn from(messages: Vec<Message>) -> Self {
        Self::from_messages(messages)
    }
}
