//! The uniform turn protocol every channel implements.

use crate::agent::Agent;
use crate::agent::domain::{AgentId, ChannelKind};
use crate::agent::ports::CompletionError;
use crate::conversation::domain::ConversationSnapshot;
use crate::message::domain::Message;
use async_trait::async_trait;
use mockable::Clock;
use thiserror::Error;
use tokio::sync::mpsc;

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Everything a channel may read during one turn.
#[derive(Clone, Copy)]
pub struct TurnContext<'a> {
    /// History as it stood when the turn started.
    pub history: &'a ConversationSnapshot,
    /// Clock used to stamp produced messages.
    pub clock: &'a (dyn Clock + Send + Sync),
}

impl<'a> TurnContext<'a> {
    /// Creates a context.
    #[must_use]
    pub const fn new(
        history: &'a ConversationSnapshot,
        clock: &'a (dyn Clock + Send + Sync),
    ) -> Self {
        Self { history, clock }
    }
}

/// Producer half of a bounded message queue.
///
/// Channels push each message as soon as it exists; the consumer commits
/// them in the order received. Sending waits while the queue is full.
#[derive(Debug, Clone)]
pub struct MessageSink {
    sender: mpsc::Sender<Message>,
}

impl MessageSink {
    /// Creates a sink and its receiver. A zero capacity is raised to one.
    #[must_use]
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<Message>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Pushes a message.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::SinkClosed`] when the consumer has gone away,
    /// for instance because the turn was cancelled.
    pub async fn send(&self, message: Message) -> ChannelResult<()> {
        self.sender
            .send(message)
            .await
            .map_err(|_| ChannelError::SinkClosed)
    }

    /// Returns `true` once the consumer has stopped receiving.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Adapter between one agent kind's invocation mechanism and the turn
/// protocol.
///
/// A channel holds no per-call state. One instance serves every agent of
/// its kind within a nexus, across any number of turns.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Returns the kind this channel services.
    fn kind(&self) -> &ChannelKind;

    /// Runs one turn for `agent`, pushing produced messages into `sink` in
    /// production order.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::IncompatibleAgent`] when the agent's profile
    /// cannot be serviced here, [`ChannelError::Completion`] when the
    /// underlying capability fails, and [`ChannelError::SinkClosed`] when the
    /// consumer stops listening.
    async fn receive(
        &self,
        agent: &Agent,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()>;
}

/// Errors raised while running a turn through a channel.
#[derive(Debug, Clone, Error)]
pub enum ChannelError {
    /// The agent's profile does not match this channel.
    #[error("channel '{kind}' cannot service agent {agent}")]
    IncompatibleAgent {
        /// Kind of the rejecting channel.
        kind: ChannelKind,
        /// Rejected agent.
        agent: AgentId,
    },

    /// The completion capability failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The consumer dropped the receiving end of the sink.
    #[error("message sink closed")]
    SinkClosed,
}
