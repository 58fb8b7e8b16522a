//! The coordinator driving turns over one shared conversation.

use super::cache::ChannelCache;
use super::{NexusConfig, NexusError, NexusResult, NexusStatus, TurnOutcome};
use crate::agent::Agent;
use crate::agent::domain::{AgentId, AgentIdentity, ChannelKind};
use crate::channel::ports::{ChannelResult, MessageSink, TurnContext};
use crate::channel::services::ChannelRegistry;
use crate::conversation::domain::{ConversationSnapshot, ConversationState, HistoryEntry};
use crate::message::domain::Message;
use crate::message::ports::validator::MessageValidator;
use crate::message::validation::DefaultMessageValidator;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Default)]
struct NexusState {
    conversation: ConversationState,
    participants: Vec<Arc<Agent>>,
    primed: HashSet<AgentId>,
    closed: bool,
}

enum TurnEvent {
    Cancelled,
    Produced(Message),
    Finished(ChannelResult<()>),
}

/// Coordinates agents taking turns in one shared conversation.
///
/// A nexus owns the conversation, the registered participants and one
/// channel per kind. Turns are serialised: concurrent `invoke` calls queue
/// behind each other, so the history never interleaves two turns. Which
/// agent speaks next is up to the caller.
///
/// # Examples
///
/// ```
/// use colloquy::agent::{Agent, ScriptedProfile};
/// use colloquy::agent::domain::AgentName;
/// use colloquy::channel::services::ChannelRegistry;
/// use colloquy::nexus::Nexus;
/// use mockable::DefaultClock;
/// use std::sync::Arc;
///
/// # tokio_test(async {
/// let nexus = Nexus::new(
///     Arc::new(ChannelRegistry::with_builtin_channels()),
///     Arc::new(DefaultClock),
/// );
/// let name = AgentName::new("assistant").expect("valid name");
/// let assistant = nexus
///     .register(Agent::new(name, ScriptedProfile::new(["Draft v1"])))
///     .expect("registered");
///
/// let replies = nexus.invoke_collect(assistant).await.expect("turn succeeds");
/// assert_eq!(replies[0].text_content(), "Draft v1");
/// assert_eq!(nexus.len().expect("readable"), 1);
/// # });
/// # fn tokio_test(future: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Runtime::new().expect("runtime").block_on(future);
/// # }
/// ```
pub struct Nexus<C>
where
    C: Clock + Send + Sync,
{
    registry: Arc<ChannelRegistry>,
    clock: Arc<C>,
    config: NexusConfig,
    validator: Arc<dyn MessageValidator>,
    state: RwLock<NexusState>,
    channels: ChannelCache,
    turn_gate: Mutex<()>,
}

impl<C> Nexus<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty nexus with the default configuration.
    #[must_use]
    pub fn new(registry: Arc<ChannelRegistry>, clock: Arc<C>) -> Self {
        Self::with_config(registry, clock, NexusConfig::default())
    }

    /// Creates an empty nexus.
    #[must_use]
    pub fn with_config(
        registry: Arc<ChannelRegistry>,
        clock: Arc<C>,
        config: NexusConfig,
    ) -> Self {
        let validator = Arc::new(DefaultMessageValidator::with_config(
            config.validation().clone(),
        ));
        Self {
            registry,
            clock,
            config,
            validator,
            state: RwLock::new(NexusState::default()),
            channels: ChannelCache::default(),
            turn_gate: Mutex::new(()),
        }
    }

    /// Replaces the validator applied to every message before commit.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn MessageValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NexusConfig {
        &self.config
    }

    /// Adds a participant and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::DuplicateParticipant`] when an agent with the
    /// same id is registered, [`NexusError::Closed`] after [`Self::close`],
    /// and [`NexusError::StatePoisoned`] if the state lock is poisoned. No
    /// state changes on error.
    pub fn register(&self, agent: Agent) -> NexusResult<AgentId> {
        let mut state = self.write_state()?;
        if state.closed {
            return Err(NexusError::Closed);
        }
        let agent_id = agent.id();
        if state.participants.iter().any(|known| known.id() == agent_id) {
            warn!(agent_id = %agent_id, "rejected duplicate participant");
            return Err(NexusError::DuplicateParticipant(agent_id));
        }

        info!(
            agent_id = %agent_id,
            agent_name = %agent.name(),
            channel_kind = %agent.channel_kind(),
            "registered participant"
        );
        state.participants.push(Arc::new(agent));
        Ok(agent_id)
    }

    /// Runs one turn for `agent_id`.
    ///
    /// On the agent's first turn its priming message, if any, is committed
    /// first. Every message the channel produces is then attributed,
    /// validated and appended before `on_message` sees it, in production
    /// order. Turns queue behind any turn already in flight.
    ///
    /// Cancelling `cancel` ends the turn before the next commit. Messages
    /// already committed stay; queued ones are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::Closed`] or [`NexusError::UnknownParticipant`]
    /// before any work, [`NexusError::ChannelCreation`] when the channel
    /// cannot be built, [`NexusError::InvalidMessage`] when a produced
    /// message fails validation and [`NexusError::Channel`] when the channel
    /// fails. Messages committed before a failure are kept.
    pub async fn invoke<F>(
        &self,
        agent_id: AgentId,
        cancel: &CancellationToken,
        mut on_message: F,
    ) -> NexusResult<TurnOutcome>
    where
        F: FnMut(&Message),
    {
        let _turn = self.turn_gate.lock().await;
        let agent = self.participant_for_turn(agent_id)?;
        let channel = self
            .channels
            .get_or_create(&agent, &self.registry)
            .await
            .map_err(|source| {
                warn!(agent_id = %agent_id, error = %source, "channel creation failed");
                NexusError::ChannelCreation {
                    agent: agent_id,
                    source,
                }
            })?;

        let mut appended = 0;
        if cancel.is_cancelled() {
            return Ok(Self::cancelled(agent_id, appended));
        }
        if let Some(priming) = self.prime(&agent)? {
            on_message(priming.as_ref());
            appended += 1;
        }

        let history = self.snapshot()?;
        let (sink, mut receiver) = MessageSink::bounded(self.config.queue_capacity());
        let ctx = TurnContext::new(&history, self.clock.as_ref());
        let mut produce = channel.receive(&agent, ctx, &sink);

        let produced = loop {
            let event = tokio::select! {
                biased;
                () = cancel.cancelled() => TurnEvent::Cancelled,
                Some(message) = receiver.recv() => TurnEvent::Produced(message),
                result = &mut produce => TurnEvent::Finished(result),
            };
            match event {
                TurnEvent::Cancelled => return Ok(Self::cancelled(agent_id, appended)),
                TurnEvent::Produced(message) => {
                    let committed = self.commit(&agent, message)?;
                    on_message(committed.as_ref());
                    appended += 1;
                }
                TurnEvent::Finished(result) => break result,
            }
        };

        receiver.close();
        while let Ok(message) = receiver.try_recv() {
            if cancel.is_cancelled() {
                return Ok(Self::cancelled(agent_id, appended));
            }
            let committed = self.commit(&agent, message)?;
            on_message(committed.as_ref());
            appended += 1;
        }

        produced.map_err(|source| {
            warn!(agent_id = %agent_id, error = %source, appended, "turn failed");
            NexusError::Channel {
                agent: agent_id,
                source,
            }
        })?;
        info!(agent_id = %agent_id, appended, "turn completed");
        Ok(TurnOutcome::Completed { appended })
    }

    /// Runs one uncancellable turn and returns the committed messages.
    ///
    /// # Errors
    ///
    /// Same as [`Self::invoke`].
    pub async fn invoke_collect(&self, agent_id: AgentId) -> NexusResult<Vec<Message>> {
        let mut messages = Vec::new();
        self.invoke(agent_id, &CancellationToken::new(), |message| {
            messages.push(message.clone());
        })
        .await?;
        Ok(messages)
    }

    /// Appends a message from outside the registered agents, such as user
    /// input, between turns.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::Closed`] after [`Self::close`] and
    /// [`NexusError::InvalidInput`] when the message fails validation.
    pub async fn post(&self, message: Message) -> NexusResult<Arc<Message>> {
        let _turn = self.turn_gate.lock().await;
        if self.read_state()?.closed {
            return Err(NexusError::Closed);
        }
        self.validator
            .validate(&message)
            .map_err(|source| NexusError::InvalidInput { source })?;
        let mut state = self.write_state()?;
        debug!(
            message_id = %message.id(),
            position = state.conversation.len(),
            "posted message"
        );
        Ok(state.conversation.append(message))
    }

    /// Closes the nexus once any in-flight turn has finished.
    ///
    /// Cached channels are dropped. Closing twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub async fn close(&self) -> NexusResult<()> {
        let _turn = self.turn_gate.lock().await;
        {
            let mut state = self.write_state()?;
            if state.closed {
                return Ok(());
            }
            state.closed = true;
            info!(messages = state.conversation.len(), "closed nexus");
        }
        self.channels.clear().await;
        Ok(())
    }

    /// Returns the full history.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn history(&self) -> NexusResult<ConversationSnapshot> {
        self.snapshot()
    }

    /// Returns the history as seen by `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn history_for(&self, agent_id: AgentId) -> NexusResult<Vec<HistoryEntry>> {
        Ok(self.snapshot()?.history_for(agent_id))
    }

    /// Returns the number of committed messages.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn len(&self) -> NexusResult<usize> {
        Ok(self.read_state()?.conversation.len())
    }

    /// Returns `true` when nothing has been committed.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn is_empty(&self) -> NexusResult<bool> {
        Ok(self.read_state()?.conversation.is_empty())
    }

    /// Returns the lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn status(&self) -> NexusResult<NexusStatus> {
        let state = self.read_state()?;
        let status = if state.closed {
            NexusStatus::Closed
        } else if state.conversation.is_empty() {
            NexusStatus::Empty
        } else {
            NexusStatus::Active
        };
        Ok(status)
    }

    /// Returns the identities of all participants in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn participants(&self) -> NexusResult<Vec<AgentIdentity>> {
        Ok(self
            .read_state()?
            .participants
            .iter()
            .map(|agent| agent.identity().clone())
            .collect())
    }

    /// Returns a participant's identity.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn participant(&self, agent_id: AgentId) -> NexusResult<Option<AgentIdentity>> {
        Ok(self
            .read_state()?
            .participants
            .iter()
            .find(|agent| agent.id() == agent_id)
            .map(|agent| agent.identity().clone()))
    }

    /// Returns `true` once the agent has taken a turn in this nexus.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::StatePoisoned`] if the state lock is poisoned.
    pub fn is_primed(&self, agent_id: AgentId) -> NexusResult<bool> {
        Ok(self.read_state()?.primed.contains(&agent_id))
    }

    /// Returns the kinds with a live cached channel, sorted.
    pub async fn channel_kinds(&self) -> Vec<ChannelKind> {
        self.channels.kinds().await
    }

    fn participant_for_turn(&self, agent_id: AgentId) -> NexusResult<Arc<Agent>> {
        let state = self.read_state()?;
        if state.closed {
            return Err(NexusError::Closed);
        }
        state
            .participants
            .iter()
            .find(|agent| agent.id() == agent_id)
            .cloned()
            .ok_or(NexusError::UnknownParticipant(agent_id))
    }

    fn prime(&self, agent: &Agent) -> NexusResult<Option<Arc<Message>>> {
        if self.read_state()?.primed.contains(&agent.id()) {
            return Ok(None);
        }
        let committed = agent
            .priming_message(self.clock.as_ref())
            .map(|message| self.commit(agent, message))
            .transpose()?;
        self.write_state()?.primed.insert(agent.id());
        if committed.is_some() {
            debug!(agent_id = %agent.id(), "committed priming message");
        }
        Ok(committed)
    }

    fn commit(&self, agent: &Agent, message: Message) -> NexusResult<Arc<Message>> {
        let attributed = message.attributed_to(agent.id());
        self.validator.validate(&attributed).map_err(|source| {
            warn!(
                agent_id = %agent.id(),
                message_id = %attributed.id(),
                error = %source,
                "rejected invalid message"
            );
            NexusError::InvalidMessage {
                agent: agent.id(),
                source,
            }
        })?;

        let mut state = self.write_state()?;
        debug!(
            agent_id = %agent.id(),
            message_id = %attributed.id(),
            position = state.conversation.len(),
            "committed message"
        );
        Ok(state.conversation.append(attributed))
    }

    fn cancelled(agent_id: AgentId, appended: usize) -> TurnOutcome {
        info!(agent_id = %agent_id, appended, "turn cancelled");
        TurnOutcome::Cancelled { appended }
    }

    fn snapshot(&self) -> NexusResult<ConversationSnapshot> {
        Ok(self.read_state()?.conversation.snapshot())
    }

    fn read_state(&self) -> NexusResult<RwLockReadGuard<'_, NexusState>> {
        self.state.read().map_err(|_| NexusError::StatePoisoned)
    }

    fn write_state(&self) -> NexusResult<RwLockWriteGuard<'_, NexusState>> {
        self.state.write().map_err(|_| NexusError::StatePoisoned)
    }
}
