//! Conversation participants.
//!
//! An [`Agent`] pairs an identity from [`domain`] with an [`AgentProfile`]
//! describing how it produces messages:
//!
//! - [`AgentProfile::ChatCompletion`] calls a [`ports::CompletionService`]
//! - [`AgentProfile::Scripted`] replays fixed replies, one per turn
//!
//! Adding a kind means adding a profile variant and a channel factory.

pub mod domain;
mod participant;
pub mod ports;
mod profile;

pub use participant::Agent;
pub use profile::{AgentProfile, ChatCompletionProfile, ScriptedProfile};

#[cfg(test)]
mod tests;
