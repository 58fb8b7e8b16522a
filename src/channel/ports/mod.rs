//! Port contracts for channels and their factories.

pub mod channel;
pub mod factory;

pub use channel::{Channel, ChannelError, ChannelResult, MessageSink, TurnContext};
pub use factory::{ChannelCreationError, ChannelFactory};
