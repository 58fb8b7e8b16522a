//! Validation errors for messages produced during a turn.

use thiserror::Error;

/// Errors raised when a produced message breaks a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The message id is nil.
    #[error("message ID is required")]
    MissingMessageId,

    /// The content parts array is empty.
    #[error("message must contain at least one content part")]
    EmptyContent,

    /// A content part has invalid structure.
    #[error("invalid content part at index {index}: {reason}")]
    InvalidContentPart {
        /// The index of the invalid part.
        index: usize,
        /// Description of the validation failure.
        reason: String,
    },

    /// The serialised message exceeds the size limit.
    #[error("message size {actual_bytes} exceeds limit of {limit_bytes} bytes")]
    MessageTooLarge {
        /// The actual size in bytes.
        actual_bytes: usize,
        /// The maximum allowed size.
        limit_bytes: usize,
    },

    /// The message has too many content parts.
    #[error("message has {actual} content parts, exceeds limit of {max}")]
    TooManyContentParts {
        /// The maximum allowed number of content parts.
        max: usize,
        /// The actual number of content parts.
        actual: usize,
    },

    /// The message could not be serialised to measure its size.
    #[error("message could not be serialised: {0}")]
    Unserialisable(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates a validation error for an invalid content part.
    #[must_use]
    pub fn invalid_content_part(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidContentPart {
            index,
            reason: reason.into(),
        }
    }

    /// Folds collected errors into one.
    ///
    /// A single error is returned as-is; several are wrapped in
    /// [`ValidationError::Multiple`]. Returns `None` when there is nothing
    /// to report.
    #[must_use]
    pub fn combine(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}
