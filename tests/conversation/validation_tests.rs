//! Validation of produced and posted messages.

use super::helpers::{CannedCompletions, agent_name};
use colloquy::agent::{Agent, ChatCompletionProfile};
use colloquy::channel::services::ChannelRegistry;
use colloquy::message::domain::{Message, Role};
use colloquy::message::error::ValidationError;
use colloquy::message::ports::validator::{MessageValidator, ValidationConfig, ValidationResult};
use colloquy::nexus::{Nexus, NexusConfig, NexusError};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Rejects any text mentioning a banned word.
struct BannedWord(&'static str);

impl MessageValidator for BannedWord {
    fn validate(&self, message: &Message) -> ValidationResult<()> {
        if message.text_content().contains(self.0) {
            return Err(ValidationError::invalid_content_part(0, "banned word"));
        }
        Ok(())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_validator_guards_commits() -> TestResult {
    let nexus = Nexus::new(
        Arc::new(ChannelRegistry::with_builtin_channels()),
        Arc::new(DefaultClock),
    )
    .with_validator(Arc::new(BannedWord("spoiler")));
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(Arc::new(CannedCompletions::new([
            "The butler did it: spoiler",
        ]))),
    ))?;

    let result = nexus.invoke_collect(assistant).await;
    let posted = nexus
        .post(Message::text(Role::User, "no spoiler please", &DefaultClock))
        .await;

    assert!(matches!(result, Err(NexusError::InvalidMessage { agent, .. }) if agent == assistant));
    assert!(matches!(posted, Err(NexusError::InvalidInput { .. })));
    assert!(nexus.is_empty()?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_limits_apply_to_agents() -> TestResult {
    let config = NexusConfig::new().with_validation(ValidationConfig {
        max_text_length: 8,
        ..ValidationConfig::default()
    });
    let nexus = Nexus::with_config(
        Arc::new(ChannelRegistry::with_builtin_channels()),
        Arc::new(DefaultClock),
        config,
    );
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(Arc::new(CannedCompletions::new([
            "short",
            "far too long for the limit",
        ]))),
    ))?;

    nexus.invoke_collect(assistant).await?;
    let second = nexus.invoke_collect(assistant).await;

    assert!(matches!(second, Err(NexusError::InvalidMessage { .. })));
    assert_eq!(nexus.len()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_config_accepts_blank_text() -> TestResult {
    let nexus = Nexus::with_config(
        Arc::new(ChannelRegistry::with_builtin_channels()),
        Arc::new(DefaultClock),
        NexusConfig::from_json(r#"{"validation": {"allow_empty_text": true}}"#)?,
    );

    nexus
        .post(Message::text(Role::User, "   ", &DefaultClock))
        .await?;

    assert_eq!(nexus.len()?, 1);
    Ok(())
}
