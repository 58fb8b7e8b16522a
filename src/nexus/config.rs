//! Nexus configuration.

use crate::message::ports::validator::ValidationConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Tunables for a [`Nexus`](super::Nexus).
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Examples
///
/// ```
/// use colloquy::nexus::NexusConfig;
///
/// let config = NexusConfig::from_json(r#"{"queue_capacity": 4}"#).expect("valid config");
/// assert_eq!(config.queue_capacity(), 4);
/// assert_eq!(config.validation().max_content_parts, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusConfig {
    queue_capacity: usize,
    validation: ValidationConfig,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            validation: ValidationConfig::default(),
        }
    }
}

impl NexusConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets how many produced messages may wait for commit before the
    /// producing channel is held back. Zero is raised to one.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Replaces the validation limits.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Returns the queue capacity, never below one.
    #[must_use]
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.max(1)
    }

    /// Returns the validation limits applied to produced messages.
    #[must_use]
    pub const fn validation(&self) -> &ValidationConfig {
        &self.validation
    }
}
