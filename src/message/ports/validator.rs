//! Validator port for messages produced by channels.

use crate::message::{domain::Message, error::ValidationError};
use serde::{Deserialize, Serialize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks a message before the coordinator commits it to shared history.
///
/// Implementations collect every failure rather than stopping at the first
/// one, and must be stateless so one validator can serve every turn.
pub trait MessageValidator: Send + Sync {
    /// Validates a message against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails; several failures are
    /// combined into [`ValidationError::Multiple`].
    fn validate(&self, message: &Message) -> ValidationResult<()>;
}

/// Limits applied by the default validator.
///
/// # Examples
///
/// ```
/// use colloquy::message::ports::validator::ValidationConfig;
///
/// let config: ValidationConfig = serde_json::from_str(r#"{"max_content_parts": 4}"#)
///     .expect("valid config");
/// assert_eq!(config.max_content_parts, 4);
/// assert!(!config.allow_empty_text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum serialised message size in bytes.
    pub max_message_size_bytes: usize,
    /// Maximum number of content parts.
    pub max_content_parts: usize,
    /// Maximum text length in characters, per part.
    pub max_text_length: usize,
    /// Whether blank text parts are accepted.
    pub allow_empty_text: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_message_size_bytes: 1024 * 1024, // 1 MiB
            max_content_parts: 100,
            max_text_length: 100_000,
            allow_empty_text: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that accepts blank text parts.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_empty_text: true,
            ..Self::default()
        }
    }
}
