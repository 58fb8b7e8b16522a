//! Error types for agent domain validation.

use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AgentDomainError {
    /// The agent name is empty after trimming.
    #[error("agent name must not be empty")]
    EmptyAgentName,

    /// The agent name exceeds the length limit.
    #[error("agent name exceeds 100 character limit: {0}")]
    AgentNameTooLong(String),

    /// The channel kind is empty after trimming.
    #[error("channel kind must not be empty")]
    EmptyChannelKind,

    /// The channel kind contains characters outside `[a-z0-9_]`.
    #[error(
        "channel kind '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidChannelKind(String),

    /// A temperature outside `0.0..=2.0` was supplied.
    #[error("temperature {0} is outside the range 0.0..=2.0")]
    TemperatureOutOfRange(f32),
}
