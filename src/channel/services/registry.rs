//! Registry mapping channel kinds to their factories.

use crate::agent::Agent;
use crate::agent::domain::ChannelKind;
use crate::channel::adapters::{ChatCompletionChannelFactory, ScriptedChannelFactory};
use crate::channel::ports::{Channel, ChannelCreationError, ChannelFactory};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Factories for every channel kind a nexus can serve.
///
/// Populated once at startup and then shared, read-only, by nexus
/// instances.
///
/// # Examples
///
/// ```
/// use colloquy::agent::domain::ChannelKind;
/// use colloquy::channel::services::ChannelRegistry;
///
/// let registry = ChannelRegistry::with_builtin_channels();
/// assert!(registry.contains(&ChannelKind::chat_completion()));
/// assert!(registry.contains(&ChannelKind::scripted()));
/// ```
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    factories: HashMap<ChannelKind, Arc<dyn ChannelFactory>>,
}

impl ChannelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the chat-completion and scripted
    /// factories.
    #[must_use]
    pub fn with_builtin_channels() -> Self {
        let builtin: [Arc<dyn ChannelFactory>; 2] = [
            Arc::new(ChatCompletionChannelFactory::new()),
            Arc::new(ScriptedChannelFactory::new()),
        ];
        let factories = builtin
            .into_iter()
            .map(|factory| (factory.kind().clone(), factory))
            .collect();
        Self { factories }
    }

    /// Adds a factory for a new kind.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelCreationError::DuplicateFactory`] when the kind is
    /// already served; the registry is left unchanged.
    pub fn register_factory(
        &mut self,
        factory: Arc<dyn ChannelFactory>,
    ) -> Result<(), ChannelCreationError> {
        let kind = factory.kind().clone();
        if self.factories.contains_key(&kind) {
            return Err(ChannelCreationError::DuplicateFactory(kind));
        }
        debug!(channel_kind = %kind, "registered channel factory");
        self.factories.insert(kind, factory);
        Ok(())
    }

    /// Consuming variant of [`Self::register_factory`].
    ///
    /// # Errors
    ///
    /// Returns [`ChannelCreationError::DuplicateFactory`] when the kind is
    /// already served.
    pub fn with_factory(
        mut self,
        factory: Arc<dyn ChannelFactory>,
    ) -> Result<Self, ChannelCreationError> {
        self.register_factory(factory)?;
        Ok(self)
    }

    /// Returns `true` when a factory serves `kind`.
    #[must_use]
    pub fn contains(&self, kind: &ChannelKind) -> bool {
        self.factories.contains_key(kind)
    }

    /// Returns the served kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<ChannelKind> {
        let mut kinds: Vec<_> = self.factories.keys().cloned().collect();
        kinds.sort_by(|left, right| left.as_str().cmp(right.as_str()));
        kinds
    }

    /// Builds a channel for the agent's kind.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelCreationError::UnknownKind`] when no factory serves
    /// the kind, or the factory's own error.
    pub async fn create(&self, agent: &Agent) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        let kind = agent.channel_kind();
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| ChannelCreationError::UnknownKind(kind.clone()))?;
        factory.create(agent).await
    }
}

impl fmt::Debug for ChannelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
