//! Free-form metadata attached to a message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Keys owned by the named metadata fields. Extensions never use them.
pub const RESERVED_METADATA_KEYS: [&str; 2] = ["author_name", "priming"];

/// Metadata describing how a message came to be.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::MessageMetadata;
/// use serde_json::json;
///
/// let metadata = MessageMetadata::with_author_name("critic")
///     .with_extension("model", json!("gpt-4o"));
/// assert_eq!(metadata.author_name.as_deref(), Some("critic"));
/// assert!(!metadata.priming);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    /// Display name of the authoring agent, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Marks the one-time instructions an agent contributes on its first turn.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub priming: bool,

    /// Provider- or caller-specific fields.
    ///
    /// Flattened on the wire. Prefer [`MessageMetadata::with_extension`],
    /// which drops keys listed in [`RESERVED_METADATA_KEYS`].
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl MessageMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates metadata naming the authoring agent.
    #[must_use]
    pub fn with_author_name(name: impl Into<String>) -> Self {
        Self {
            author_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Flags the message as a priming message.
    #[must_use]
    pub fn as_priming(mut self) -> Self {
        self.priming = true;
        self
    }

    /// Adds an extension field.
    ///
    /// Keys in [`RESERVED_METADATA_KEYS`] are ignored so that an extension cannot
    /// overwrite `author_name` or `priming` once serialised.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        let owned = key.into();
        if !RESERVED_METADATA_KEYS.contains(&owned.as_str()) {
            self.extensions.insert(owned, value);
        }
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.author_name.is_none() && !self.priming && self.extensions.is_empty()
    }
}
