//! The nexus: coordinator of one shared conversation.
//!
//! A [`Nexus`] owns the conversation state, its participants and a cache of
//! channels, and drives turns on request. It moves through
//! [`NexusStatus::Empty`], [`NexusStatus::Active`] and finally
//! [`NexusStatus::Closed`].

mod cache;
mod config;
mod error;
mod service;
mod status;

pub use config::NexusConfig;
pub use error::{NexusError, NexusResult};
pub use service::Nexus;
pub use status::{NexusStatus, TurnOutcome};

#[cfg(test)]
mod tests;
