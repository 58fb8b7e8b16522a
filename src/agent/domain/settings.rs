//! Execution settings forwarded to a completion service.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// How a chat-completion agent wants its completions produced.
///
/// The coordinator never interprets these values; they travel unchanged to
/// the connector inside each [`CompletionRequest`](crate::agent::ports::CompletionRequest).
///
/// # Examples
///
/// ```
/// use colloquy::agent::domain::ExecutionSettings;
///
/// let settings = ExecutionSettings::new()
///     .with_model("gpt-4o")
///     .with_temperature(0.2)
///     .expect("temperature in range")
///     .streaming();
/// assert_eq!(settings.model(), Some("gpt-4o"));
/// assert!(settings.is_streaming());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extensions: HashMap<String, Value>,
}

impl ExecutionSettings {
    /// Creates empty settings; the connector applies its own defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the sampling temperature.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::TemperatureOutOfRange`] outside `0.0..=2.0`.
    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, AgentDomainError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AgentDomainError::TemperatureOutOfRange(temperature));
        }
        self.temperature = Some(temperature);
        Ok(self)
    }

    /// Caps the completion length.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Requests incremental delivery from the connector.
    #[must_use]
    pub const fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }

    /// Adds a connector-specific option.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the sampling temperature.
    #[must_use]
    pub const fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Returns the completion length cap.
    #[must_use]
    pub const fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    /// Returns whether incremental delivery was requested.
    #[must_use]
    pub const fn is_streaming(&self) -> bool {
        self.stream
    }

    /// Returns connector-specific options.
    #[must_use]
    pub const fn extensions(&self) -> &HashMap<String, Value> {
        &self.extensions
    }
}
