//! Then steps for nexus BDD scenarios.

use super::world::{NexusWorld, run_async};
use colloquy::nexus::{NexusError, TurnOutcome};
use rstest_bdd_macros::then;

#[then("the conversation holds {count:usize} messages")]
fn conversation_holds(world: &mut NexusWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world
        .nexus()?
        .len()
        .map_err(|err| eyre::eyre!("len failed: {err}"))?;
    if len != count {
        return Err(eyre::eyre!("expected {count} messages, found {len}"));
    }
    Ok(())
}

#[then("the conversation holds {count:usize} priming messages")]
fn conversation_holds_priming(world: &mut NexusWorld, count: usize) -> Result<(), eyre::Report> {
    let history = world
        .nexus()?
        .history()
        .map_err(|err| eyre::eyre!("history failed: {err}"))?;
    let primed = history.iter().filter(|message| message.is_priming()).count();
    if primed != count {
        return Err(eyre::eyre!("expected {count} priming messages, found {primed}"));
    }
    Ok(())
}

#[then(r#"message {position:usize} reads "{text}" from "{name}""#)]
fn message_reads(
    world: &mut NexusWorld,
    position: usize,
    text: String,
    name: String,
) -> Result<(), eyre::Report> {
    let agent_id = world.agent_id(&name)?;
    let history = world
        .nexus()?
        .history()
        .map_err(|err| eyre::eyre!("history failed: {err}"))?;
    let message = position
        .checked_sub(1)
        .and_then(|index| history.get(index))
        .ok_or_else(|| eyre::eyre!("no message at position {position}"))?;
    if message.text_content() != text || message.source() != Some(agent_id) {
        return Err(eyre::eyre!(
            "expected '{text}' from '{name}', found {message:?}"
        ));
    }
    Ok(())
}

#[then("registration fails as a duplicate")]
fn registration_fails_as_duplicate(world: &NexusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(NexusError::DuplicateParticipant(_))) {
        return Err(eyre::eyre!("expected duplicate participant error, got {result:?}"));
    }
    Ok(())
}

#[then("the nexus has {count:usize} participants")]
fn nexus_has_participants(world: &mut NexusWorld, count: usize) -> Result<(), eyre::Report> {
    let participants = world
        .nexus()?
        .participants()
        .map_err(|err| eyre::eyre!("participants failed: {err}"))?;
    if participants.len() != count {
        return Err(eyre::eyre!(
            "expected {count} participants, found {}",
            participants.len()
        ));
    }
    Ok(())
}

#[then(r#"the "{kind}" channel was created {count:usize} times"#)]
fn channel_created(world: &NexusWorld, kind: String, count: usize) -> Result<(), eyre::Report> {
    let factory = world
        .factories
        .get(&kind)
        .ok_or_else(|| eyre::eyre!("no counted factory for '{kind}'"))?;
    if factory.created() != count {
        return Err(eyre::eyre!(
            "expected {count} channels of kind '{kind}', found {}",
            factory.created()
        ));
    }
    Ok(())
}

#[then("the turn was cancelled with {count:usize} appended")]
fn turn_was_cancelled(world: &NexusWorld, count: usize) -> Result<(), eyre::Report> {
    let turn = world
        .last_turn
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing turn result in scenario world"))?;
    match turn {
        Ok(TurnOutcome::Cancelled { appended }) if *appended == count => Ok(()),
        other => Err(eyre::eyre!(
            "expected a cancelled turn with {count} appended, got {other:?}"
        )),
    }
}

#[then(r#""{name}" cannot take a turn"#)]
fn agent_cannot_take_turn(world: &mut NexusWorld, name: String) -> Result<(), eyre::Report> {
    let agent_id = world.agent_id(&name)?;
    let result = run_async(world.nexus()?.invoke_collect(agent_id));
    if !matches!(result, Err(NexusError::Closed)) {
        return Err(eyre::eyre!("expected closed nexus error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the nexus status is "{status}""#)]
fn nexus_status_is(world: &mut NexusWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world
        .nexus()?
        .status()
        .map_err(|err| eyre::eyre!("status failed: {err}"))?;
    if actual.as_str() != status {
        return Err(eyre::eyre!("expected status '{status}', found '{actual}'"));
    }
    Ok(())
}
