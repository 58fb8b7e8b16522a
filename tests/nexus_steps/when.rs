//! When steps for nexus BDD scenarios.

use super::world::{NexusWorld, run_async};
use rstest_bdd_macros::when;
use tokio_util::sync::CancellationToken;

#[when(r#""{name}" takes a turn"#)]
fn agent_takes_turn(world: &mut NexusWorld, name: String) -> Result<(), eyre::Report> {
    let agent_id = world.agent_id(&name)?;
    let cancel = CancellationToken::new();
    let outcome = run_async(world.nexus()?.invoke(agent_id, &cancel, |_| {}))
        .map_err(|err| eyre::eyre!("turn for '{name}' failed: {err}"))?;
    world.last_turn = Some(Ok(outcome));
    Ok(())
}

#[when(r#""{name}" takes a turn cancelled after the first message"#)]
fn agent_takes_cancelled_turn(world: &mut NexusWorld, name: String) -> Result<(), eyre::Report> {
    let agent_id = world.agent_id(&name)?;
    let cancel = CancellationToken::new();
    let result = run_async(world.nexus()?.invoke(agent_id, &cancel, |_| cancel.cancel()));
    world.last_turn = Some(result);
    Ok(())
}

#[when(r#""{name}" is registered again"#)]
fn agent_registered_again(world: &mut NexusWorld, name: String) -> Result<(), eyre::Report> {
    let agent = world
        .agents
        .get(&name)
        .cloned()
        .ok_or_else(|| eyre::eyre!("no agent named '{name}' in scenario world"))?;
    world.last_register_result = Some(world.nexus()?.register(agent));
    Ok(())
}

#[when("the nexus is closed")]
fn nexus_closed(world: &mut NexusWorld) -> Result<(), eyre::Report> {
    run_async(world.nexus()?.close()).map_err(|err| eyre::eyre!("close failed: {err}"))
}
