//! Channels: adapters between agent kinds and the turn protocol.
//!
//! - Port contracts in [`ports`]: [`ports::Channel`], [`ports::ChannelFactory`]
//!   and the bounded [`ports::MessageSink`] channels push messages into
//! - Built-in adapters in [`adapters`] for chat-completion and scripted agents
//! - The [`services::ChannelRegistry`] mapping kinds to factories

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
