//! Domain model for conversation participants.
//!
//! Identity, naming and channel-kind tags are plain values; the behaviour
//! that turns history into new messages lives in [`crate::agent::Agent`].

mod error;
mod identity;
mod ids;
mod kind;
mod name;
mod settings;

pub use error::AgentDomainError;
pub use identity::AgentIdentity;
pub use ids::AgentId;
pub use kind::ChannelKind;
pub use name::AgentName;
pub use settings::ExecutionSettings;
