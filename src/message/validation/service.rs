//! Default implementation of the [`MessageValidator`] port.

use crate::message::{
    domain::Message,
    error::ValidationError,
    ports::validator::{MessageValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Applies every rule in [`rules`] and reports all failures together.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::{Message, Role};
/// use colloquy::message::ports::validator::MessageValidator;
/// use colloquy::message::validation::DefaultMessageValidator;
/// use mockable::DefaultClock;
///
/// let message = Message::text(Role::Assistant, "Draft v1", &DefaultClock);
/// assert!(DefaultMessageValidator::new().validate(&message).is_ok());
///
/// let blank = Message::text(Role::Assistant, "   ", &DefaultClock);
/// assert!(DefaultMessageValidator::new().validate(&blank).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active limits.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn validate(&self, message: &Message) -> ValidationResult<()> {
        let mut errors = Vec::new();

        let checks = [
            rules::validate_message_id(message),
            rules::validate_content_not_empty(message),
            rules::validate_content_parts_count(message, &self.config),
            rules::validate_content_parts(message, &self.config),
            rules::validate_message_size(message, &self.config),
        ];
        for error in checks.into_iter().filter_map(Result::err) {
            collect_errors(&mut errors, error);
        }

        ValidationError::combine(errors).map_or(Ok(()), Err)
    }
}

/// Flattens nested `Multiple` variants into one list.
fn collect_errors(errors: &mut Vec<ValidationError>, error: ValidationError) {
    match error {
        ValidationError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}
