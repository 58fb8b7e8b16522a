//! Turn ordering, priming and per-agent history views.

use super::helpers::{CannedCompletions, TestNexus, agent_name, nexus};
use colloquy::agent::{Agent, ChatCompletionProfile, ScriptedProfile};
use colloquy::conversation::domain::Authorship;
use colloquy::message::domain::{Message, Role};
use colloquy::nexus::NexusStatus;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn draft_and_critique_alternate(nexus: TestNexus) -> TestResult {
    let writer = Arc::new(CannedCompletions::new(["Draft v1", "Draft v2"]));
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(writer.clone()),
    ))?;
    let critic = nexus.register(Agent::new(
        agent_name("critic"),
        ScriptedProfile::new(["Critique of v1", "Approved"]).with_role(Role::User),
    ))?;

    for agent in [assistant, critic, assistant, critic] {
        nexus.invoke_collect(agent).await?;
    }

    let history = nexus.history()?;
    let texts: Vec<_> = history.iter().map(Message::text_content).collect();
    assert_eq!(texts, ["Draft v1", "Critique of v1", "Draft v2", "Approved"]);
    let roles: Vec<_> = history.iter().map(Message::role).collect();
    assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant, Role::User]);
    assert_eq!(nexus.status()?, NexusStatus::Active);

    let requests = writer.requests();
    assert_eq!(requests.len(), 2);
    let second_prompt: Vec<_> = requests
        .last()
        .map(|request| {
            request
                .history
                .iter()
                .map(|entry| entry.authorship())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        second_prompt,
        [Authorship::Own, Authorship::Peer(critic)]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn instructions_reach_only_their_own_agent(nexus: TestNexus) -> TestResult {
    let writer = Arc::new(CannedCompletions::new(["Draft v1"]));
    let reviewer = Arc::new(CannedCompletions::new(["Looks fine"]));
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(writer.clone()).with_instructions("Write a haiku."),
    ))?;
    let critic = nexus.register(Agent::new(
        agent_name("critic"),
        ChatCompletionProfile::new(reviewer.clone()).with_instructions("Be harsh."),
    ))?;

    nexus.invoke_collect(assistant).await?;
    nexus.invoke_collect(critic).await?;

    assert_eq!(nexus.len()?, 4);
    let seen_by_critic: Vec<_> = reviewer
        .requests()
        .first()
        .map(|request| {
            request
                .history
                .iter()
                .map(|entry| entry.message().text_content())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(seen_by_critic, ["Draft v1", "Be harsh."]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_input_joins_the_conversation(nexus: TestNexus) -> TestResult {
    let writer = Arc::new(CannedCompletions::new(["Draft v1"]));
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(writer.clone()),
    ))?;

    nexus
        .post(Message::text(Role::User, "Write about autumn", &DefaultClock))
        .await?;
    nexus.invoke_collect(assistant).await?;

    let prompt_roles: Vec<_> = writer
        .requests()
        .first()
        .map(|request| request.history.iter().map(|entry| entry.prompt_role()).collect())
        .unwrap_or_default();
    assert_eq!(prompt_roles, [Role::User]);
    assert_eq!(nexus.len()?, 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn exhausted_connector_ends_turn_quietly(nexus: TestNexus) -> TestResult {
    let writer = Arc::new(CannedCompletions::new(["only once"]));
    let assistant = nexus.register(Agent::new(
        agent_name("assistant"),
        ChatCompletionProfile::new(writer),
    ))?;

    let first = nexus.invoke_collect(assistant).await?;
    let second = nexus.invoke_collect(assistant).await?;

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(nexus.len()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_survives_close(nexus: TestNexus) -> TestResult {
    let critic = nexus.register(Agent::new(
        agent_name("critic"),
        ScriptedProfile::new(["Critique of v1"]),
    ))?;
    nexus.invoke_collect(critic).await?;

    nexus.close().await?;

    assert_eq!(nexus.status()?, NexusStatus::Closed);
    assert_eq!(
        nexus.history()?.last().map(Message::text_content).as_deref(),
        Some("Critique of v1")
    );
    Ok(())
}
