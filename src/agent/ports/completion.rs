//! Port for chat-completion connectors.
//!
//! A connector turns an agent's view of the history into one or more
//! completions. Connectors may answer in one batch or stream completions as
//! they arrive; the chat-completion channel handles both the same way.

use crate::agent::domain::{AgentId, ExecutionSettings};
use crate::conversation::domain::HistoryEntry;
use crate::message::domain::{ContentPart, Role};
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion operations.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Request handed to a [`CompletionService`].
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Agent the completion is produced for.
    pub agent: AgentId,
    /// History from the agent's point of view, oldest first.
    ///
    /// The agent's own priming message, if any, is part of this history.
    pub history: Vec<HistoryEntry>,
    /// Execution settings configured on the agent.
    pub settings: ExecutionSettings,
}

/// A single completion returned by a connector.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Role of the produced message, usually [`Role::Assistant`].
    pub role: Role,
    /// Produced content; must not be empty.
    pub content: Vec<ContentPart>,
    /// Provider-specific fields copied into message metadata.
    pub extensions: HashMap<String, Value>,
}

impl Completion {
    /// Creates an assistant completion holding a single text part.
    #[must_use]
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentPart::text(text)],
            extensions: HashMap::new(),
        }
    }

    /// Adds a provider-specific field.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

/// What a connector hands back: everything at once, or a stream.
pub enum CompletionOutput {
    /// All completions, in order.
    Batch(Vec<Completion>),
    /// Completions delivered incrementally, in order.
    Stream(BoxStream<'static, CompletionResult<Completion>>),
}

impl fmt::Debug for CompletionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch(completions) => f.debug_tuple("Batch").field(completions).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Chat-completion connector contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Produces completions for the given request.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Request`] when the connector fails and
    /// [`CompletionError::Malformed`] when its response cannot be used.
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<CompletionOutput>;
}

/// Errors raised by completion connectors.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The connector call failed.
    #[error("completion request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// The connector answered with something that cannot become a message.
    #[error("malformed completion: {0}")]
    Malformed(String),
}

impl CompletionError {
    /// Wraps a connector failure.
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Creates a malformed-response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
