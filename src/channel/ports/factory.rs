//! Factory port producing channels for one kind.

use super::Channel;
use crate::agent::Agent;
use crate::agent::domain::ChannelKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Creates channels of a single kind.
#[async_trait]
pub trait ChannelFactory: Send + Sync {
    /// Returns the kind produced by this factory.
    fn kind(&self) -> &ChannelKind;

    /// Creates a channel able to serve `agent` and every other agent of the
    /// same kind.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelCreationError::Failed`] when the channel cannot be
    /// built.
    async fn create(&self, agent: &Agent) -> Result<Arc<dyn Channel>, ChannelCreationError>;
}

/// Errors raised while registering factories or creating channels.
#[derive(Debug, Clone, Error)]
pub enum ChannelCreationError {
    /// No factory is registered for the kind.
    #[error("no channel factory registered for kind '{0}'")]
    UnknownKind(ChannelKind),

    /// A factory for the kind is already registered.
    #[error("a channel factory for kind '{0}' is already registered")]
    DuplicateFactory(ChannelKind),

    /// The factory failed to build the channel.
    #[error("failed to create channel '{kind}': {source}")]
    Failed {
        /// Kind being created.
        kind: ChannelKind,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl ChannelCreationError {
    /// Wraps a factory failure for `kind`.
    pub fn failed(kind: ChannelKind, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Failed {
            kind,
            source: Arc::new(err),
        }
    }
}
