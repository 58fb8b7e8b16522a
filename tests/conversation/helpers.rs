//! Shared helpers for conversation integration tests.

use async_trait::async_trait;
use colloquy::agent::domain::AgentName;
use colloquy::agent::ports::{
    Completion, CompletionOutput, CompletionRequest, CompletionResult, CompletionService,
};
use colloquy::channel::services::ChannelRegistry;
use colloquy::nexus::Nexus;
use mockable::DefaultClock;
use rstest::fixture;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Nexus type used throughout the integration tests.
pub type TestNexus = Nexus<DefaultClock>;

/// Provides a nexus with the built-in channels.
#[fixture]
pub fn nexus() -> TestNexus {
    Nexus::new(
        Arc::new(ChannelRegistry::with_builtin_channels()),
        Arc::new(DefaultClock),
    )
}

/// Parses an agent name.
///
/// # Panics
///
/// Panics if `raw` is not a valid agent name.
pub fn agent_name(raw: &str) -> AgentName {
    AgentName::new(raw).expect("test agent names are valid")
}

/// Connector answering each request with the next canned reply.
///
/// Every request is recorded so tests can inspect what the agent saw.
#[derive(Debug, Default)]
pub struct CannedCompletions {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl CannedCompletions {
    /// Creates a connector that answers with `replies` in order.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the request log is poisoned.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("request log").clone()
    }
}

#[async_trait]
impl CompletionService for CannedCompletions {
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<CompletionOutput> {
        self.requests.lock().expect("request log").push(request);
        let reply = self.replies.lock().expect("reply queue").pop_front();
        Ok(CompletionOutput::Batch(
            reply.map(Completion::assistant_text).into_iter().collect(),
        ))
    }
}
