//! Custom channel kinds plugged in through the registry.

use async_trait::async_trait;
use colloquy::agent::domain::ChannelKind;
use colloquy::agent::ports::CompletionError;
use colloquy::agent::{Agent, ScriptedProfile};
use colloquy::channel::ports::{
    Channel, ChannelCreationError, ChannelError, ChannelFactory, ChannelResult, MessageSink,
    TurnContext,
};
use colloquy::channel::services::ChannelRegistry;
use colloquy::message::domain::{ContentPart, Message, Role};
use colloquy::nexus::{Nexus, NexusError};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::helpers::{TestNexus, agent_name, nexus};

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn echo_kind() -> ChannelKind {
    ChannelKind::new("echo").expect("valid kind")
}

/// Repeats the latest message back to the conversation.
struct EchoChannel {
    kind: ChannelKind,
}

#[async_trait]
impl Channel for EchoChannel {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn receive(
        &self,
        agent: &Agent,
        ctx: TurnContext<'_>,
        sink: &MessageSink,
    ) -> ChannelResult<()> {
        let Some(latest) = ctx.history.last() else {
            return Ok(());
        };
        let echo = Message::builder(Role::Assistant)
            .with_content(ContentPart::text(format!("echo: {}", latest.text_content())))
            .with_source(agent.id())
            .build(ctx.clock)
            .map_err(|err| CompletionError::malformed(err.to_string()))?;
        sink.send(echo).await
    }
}

struct EchoChannelFactory {
    kind: ChannelKind,
    created: AtomicUsize,
}

impl EchoChannelFactory {
    fn new() -> Self {
        Self {
            kind: echo_kind(),
            created: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChannelFactory for EchoChannelFactory {
    fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    async fn create(&self, _agent: &Agent) -> Result<Arc<dyn Channel>, ChannelCreationError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(EchoChannel {
            kind: self.kind.clone(),
        }))
    }
}

fn echo_agent(name: &str) -> Agent {
    Agent::new(agent_name(name), ScriptedProfile::new(Vec::<String>::new()))
        .with_channel_kind(echo_kind())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_kind_serves_every_agent_of_that_kind() -> TestResult {
    let factory = Arc::new(EchoChannelFactory::new());
    let registry = ChannelRegistry::with_builtin_channels().with_factory(factory.clone())?;
    let nexus = Nexus::new(Arc::new(registry), Arc::new(DefaultClock));
    let first = nexus.register(echo_agent("parrot"))?;
    let second = nexus.register(echo_agent("mynah"))?;

    nexus
        .post(Message::text(Role::User, "hello", &DefaultClock))
        .await?;
    nexus.invoke_collect(first).await?;
    nexus.invoke_collect(second).await?;

    let texts: Vec<_> = nexus.history()?.iter().map(Message::text_content).collect();
    assert_eq!(texts, ["hello", "echo: hello", "echo: echo: hello"]);
    assert_eq!(factory.created.load(Ordering::SeqCst), 1);
    assert_eq!(nexus.channel_kinds().await, [echo_kind()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregistered_kind_fails_the_turn(nexus: TestNexus) -> TestResult {
    let parrot = nexus.register(echo_agent("parrot"))?;

    let result = nexus.invoke_collect(parrot).await;

    assert!(matches!(
        result,
        Err(NexusError::ChannelCreation {
            source: ChannelCreationError::UnknownKind(_),
            ..
        })
    ));
    assert!(nexus.is_empty()?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn builtin_channel_rejects_mismatched_profiles(nexus: TestNexus) -> TestResult {
    let critic = nexus.register(
        Agent::new(agent_name("critic"), ScriptedProfile::new(["x"]))
            .with_channel_kind(ChannelKind::chat_completion()),
    )?;

    let result = nexus.invoke_collect(critic).await;

    assert!(matches!(
        result,
        Err(NexusError::Channel {
            source: ChannelError::IncompatibleAgent { .. },
            ..
        })
    ));
    Ok(())
}
