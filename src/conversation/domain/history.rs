//! Agent-relative history entries.

use crate::agent::domain::AgentId;
use crate::message::domain::{Message, Role};
use std::sync::Arc;

/// Who authored a message, relative to the agent reading the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authorship {
    /// The reading agent produced the message.
    Own,
    /// Another registered agent produced the message.
    Peer(AgentId),
    /// The message carries no agent attribution (for example user input).
    External,
}

/// One message of the history as seen by a specific agent.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    authorship: Authorship,
    message: Arc<Message>,
}

impl HistoryEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(authorship: Authorship, message: Arc<Message>) -> Self {
        Self {
            authorship,
            message,
        }
    }

    /// Returns the authorship tag.
    #[must_use]
    pub const fn authorship(&self) -> Authorship {
        self.authorship
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Returns `true` when the reading agent authored the message.
    #[must_use]
    pub const fn is_own(&self) -> bool {
        matches!(self.authorship, Authorship::Own)
    }

    /// Role to present to a completion provider.
    ///
    /// A peer's assistant output is input from the reader's perspective, so
    /// it is presented as [`Role::User`]. All other roles pass through.
    #[must_use]
    pub fn prompt_role(&self) -> Role {
        match (self.authorship, self.message.role()) {
            (Authorship::Peer(_), Role::Assistant) => Role::User,
            (_, role) => role,
        }
    }
}
