//! Nexus errors.

use crate::agent::domain::AgentId;
use crate::channel::ports::{ChannelCreationError, ChannelError};
use crate::message::error::ValidationError;
use thiserror::Error;

/// Result type for nexus operations.
pub type NexusResult<T> = Result<T, NexusError>;

/// Errors returned by [`Nexus`](super::Nexus) operations.
///
/// Turn failures leave every message committed before the failure in place.
#[derive(Debug, Clone, Error)]
pub enum NexusError {
    /// An agent with the same id is already registered.
    #[error("agent {0} is already registered")]
    DuplicateParticipant(AgentId),

    /// No agent with this id is registered.
    #[error("agent {0} is not registered")]
    UnknownParticipant(AgentId),

    /// The nexus has been closed.
    #[error("nexus is closed")]
    Closed,

    /// The agent's channel could not be created. Nothing was cached.
    #[error("failed to create channel for agent {agent}: {source}")]
    ChannelCreation {
        /// Agent whose turn needed the channel.
        agent: AgentId,
        /// Underlying failure.
        source: ChannelCreationError,
    },

    /// The channel failed during the turn.
    #[error("turn of agent {agent} failed: {source}")]
    Channel {
        /// Agent whose turn failed.
        agent: AgentId,
        /// Underlying failure.
        source: ChannelError,
    },

    /// A produced message failed validation and was not committed.
    #[error("agent {agent} produced an invalid message: {source}")]
    InvalidMessage {
        /// Agent that produced the message.
        agent: AgentId,
        /// Validation failure.
        source: ValidationError,
    },

    /// A message posted from outside the agents failed validation.
    #[error("posted message is invalid: {source}")]
    InvalidInput {
        /// Validation failure.
        source: ValidationError,
    },

    /// A panic while holding the conversation lock left it poisoned.
    #[error("conversation state lock poisoned")]
    StatePoisoned,
}
