//! Given steps for nexus BDD scenarios.

use super::world::{CountingFactory, FixedReply, NexusWorld, agent_name};
use colloquy::agent::domain::ChannelKind;
use colloquy::agent::{Agent, ChatCompletionProfile, ScriptedProfile};
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given(r#"a chat agent "{name}" replying "{reply}""#)]
fn a_chat_agent(world: &mut NexusWorld, name: String, reply: String) -> Result<(), eyre::Report> {
    let profile = ChatCompletionProfile::new(Arc::new(FixedReply::batch(reply)));
    world.register(&name, Agent::new(agent_name(&name)?, profile))
}

#[given(r#"a chat agent "{name}" that stalls after "{reply}""#)]
fn a_stalling_chat_agent(
    world: &mut NexusWorld,
    name: String,
    reply: String,
) -> Result<(), eyre::Report> {
    let profile = ChatCompletionProfile::new(Arc::new(FixedReply::stalling(reply)));
    world.register(&name, Agent::new(agent_name(&name)?, profile))
}

#[given(r#"a chat agent "{name}" using kind "{kind}" with reply "{reply}""#)]
fn a_chat_agent_on_kind(
    world: &mut NexusWorld,
    name: String,
    kind: String,
    reply: String,
) -> Result<(), eyre::Report> {
    let channel_kind = ChannelKind::new(kind).map_err(|err| eyre::eyre!("channel kind: {err}"))?;
    let profile = ChatCompletionProfile::new(Arc::new(FixedReply::batch(reply)));
    let agent = Agent::new(agent_name(&name)?, profile).with_channel_kind(channel_kind);
    world.register(&name, agent)
}

#[given(r#"a scripted agent "{name}" replying "{reply}""#)]
fn a_scripted_agent(
    world: &mut NexusWorld,
    name: String,
    reply: String,
) -> Result<(), eyre::Report> {
    let agent = Agent::new(agent_name(&name)?, ScriptedProfile::new([reply]));
    world.register(&name, agent)
}

#[given(
    r#"a scripted agent "{name}" with instructions "{instructions}" and replies "{first}" and "{second}""#
)]
fn a_primed_scripted_agent(
    world: &mut NexusWorld,
    name: String,
    instructions: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let profile = ScriptedProfile::new([first, second]).with_instructions(instructions);
    world.register(&name, Agent::new(agent_name(&name)?, profile))
}

#[given(r#"a counted channel kind "{kind}""#)]
fn a_counted_channel_kind(world: &mut NexusWorld, kind: String) -> Result<(), eyre::Report> {
    let channel_kind =
        ChannelKind::new(kind.clone()).map_err(|err| eyre::eyre!("channel kind: {err}"))?;
    world
        .factories
        .insert(kind, Arc::new(CountingFactory::new(channel_kind)));
    Ok(())
}
