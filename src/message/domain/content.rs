//! Content carried by a message.
//!
//! A message body is a list of parts so that plain text, tool traffic and
//! attachments can travel in one unit without the coordinator caring which
//! provider produced them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One part of a message body.
///
/// Serialised with a `type` tag:
///
/// ```json
/// { "type": "text", "text": "Draft v1" }
/// { "type": "tool_call", "call_id": "c1", "name": "search", "arguments": {} }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text(TextPart),
    /// A tool invocation requested by an agent.
    ToolCall(ToolCallPart),
    /// The outcome of a tool invocation.
    ToolResult(ToolResultPart),
    /// Binary or file content, base64 or inline text.
    Attachment(AttachmentPart),
}

impl ContentPart {
    /// Shorthand for a [`ContentPart::Text`] part.
    ///
    /// # Examples
    ///
    /// ```
    /// use colloquy::message::domain::ContentPart;
    ///
    /// let part = ContentPart::text("Critique of v1");
    /// assert_eq!(part.as_text(), Some("Critique of v1"));
    /// ```
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    /// Returns the text if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(part) => Some(part.text.as_str()),
            Self::ToolCall(_) | Self::ToolResult(_) | Self::Attachment(_) => None,
        }
    }
}

/// Text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    /// The text itself.
    pub text: String,
}

impl TextPart {
    /// Creates a text part.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns `true` when the text is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A tool call emitted by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallPart {
    /// Correlates the call with its [`ToolResultPart`].
    pub call_id: String,
    /// Tool name.
    pub name: String,
    /// JSON arguments.
    pub arguments: Value,
}

impl ToolCallPart {
    /// Creates a tool call part.
    #[must_use]
    pub fn new(call_id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            call_id: call_id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// The result of a tool call, matched by `call_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultPart {
    /// The call this result answers.
    pub call_id: String,
    /// Structured or textual output.
    pub content: Value,
    /// Whether the tool succeeded.
    #[serde(default = "default_success")]
    pub success: bool,
}

const fn default_success() -> bool {
    true
}

impl ToolResultPart {
    /// Creates a successful result.
    #[must_use]
    pub fn success(call_id: impl Into<String>, content: Value) -> Self {
        Self {
            call_id: call_id.into(),
            content,
            success: true,
        }
    }

    /// Creates a failed result carrying an error description.
    #[must_use]
    pub fn failure(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: Value::String(error.into()),
            success: false,
        }
    }
}

/// An attachment such as an image or a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentPart {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Payload; base64 for binary data.
    pub data: String,
}

impl AttachmentPart {
    /// Creates an attachment part.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            name: None,
            data: data.into(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
