//! Individual validation rules.
//!
//! Each rule is a pure function checking one aspect of a message.

use crate::message::{
    domain::{AttachmentPart, ContentPart, Message, TextPart, ToolCallPart, ToolResultPart},
    error::ValidationError,
    ports::validator::ValidationConfig,
};

/// Rejects messages whose id is nil.
///
/// Only reachable for messages deserialised from external data.
///
/// # Errors
///
/// Returns [`ValidationError::MissingMessageId`] if the id is nil.
pub fn validate_message_id(message: &Message) -> Result<(), ValidationError> {
    if message.id().as_ref().is_nil() {
        return Err(ValidationError::MissingMessageId);
    }
    Ok(())
}

/// Rejects messages without content.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyContent`] if there are no parts.
pub fn validate_content_not_empty(message: &Message) -> Result<(), ValidationError> {
    if message.content().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// Rejects messages with more parts than configured.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyContentParts`] when over the limit.
pub fn validate_content_parts_count(
    message: &Message,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let count = message.content().len();
    if count > config.max_content_parts {
        return Err(ValidationError::TooManyContentParts {
            max: config.max_content_parts,
            actual: count,
        });
    }
    Ok(())
}

/// Rejects messages whose JSON form exceeds the size limit.
///
/// # Errors
///
/// Returns [`ValidationError::MessageTooLarge`] when over the limit, or
/// [`ValidationError::Unserialisable`] if serialisation fails.
pub fn validate_message_size(
    message: &Message,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let serialised =
        serde_json::to_vec(message).map_err(|e| ValidationError::Unserialisable(e.to_string()))?;

    if serialised.len() > config.max_message_size_bytes {
        return Err(ValidationError::MessageTooLarge {
            actual_bytes: serialised.len(),
            limit_bytes: config.max_message_size_bytes,
        });
    }
    Ok(())
}

/// Checks every content part, collecting all failures.
///
/// # Errors
///
/// Returns the failing part's error, or [`ValidationError::Multiple`].
pub fn validate_content_parts(
    message: &Message,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let errors = message
        .content()
        .iter()
        .enumerate()
        .filter_map(|(index, part)| validate_content_part(part, index, config).err())
        .collect();

    ValidationError::combine(errors).map_or(Ok(()), Err)
}

fn validate_content_part(
    part: &ContentPart,
    index: usize,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    match part {
        ContentPart::Text(text) => validate_text_part(text, index, config),
        ContentPart::ToolCall(call) => validate_tool_call_part(call, index),
        ContentPart::ToolResult(result) => validate_tool_result_part(result, index),
        ContentPart::Attachment(attachment) => validate_attachment_part(attachment, index),
    }
}

fn validate_text_part(
    text: &TextPart,
    index: usize,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if !config.allow_empty_text && text.is_blank() {
        return Err(ValidationError::invalid_content_part(
            index,
            "text content cannot be empty",
        ));
    }

    if text.text.chars().count() > config.max_text_length {
        return Err(ValidationError::invalid_content_part(
            index,
            format!(
                "text content exceeds maximum length of {} characters",
                config.max_text_length
            ),
        ));
    }
    Ok(())
}

fn validate_tool_call_part(call: &ToolCallPart, index: usize) -> Result<(), ValidationError> {
    if call.call_id.is_empty() {
        return Err(ValidationError::invalid_content_part(
            index,
            "tool call must have a call_id",
        ));
    }
    if call.name.is_empty() {
        return Err(ValidationError::invalid_content_part(
            index,
            "tool call must have a name",
        ));
    }
    Ok(())
}

fn validate_tool_result_part(result: &ToolResultPart, index: usize) -> Result<(), ValidationError> {
    if result.call_id.is_empty() {
        return Err(ValidationError::invalid_content_part(
            index,
            "tool result must have a call_id",
        ));
    }
    Ok(())
}

fn validate_attachment_part(
    attachment: &AttachmentPart,
    index: usize,
) -> Result<(), ValidationError> {
    if attachment.mime_type.is_empty() {
        return Err(ValidationError::invalid_content_part(
            index,
            "attachment must have a MIME type",
        ));
    }
    if attachment.data.is_empty() {
        return Err(ValidationError::invalid_content_part(
            index,
            "attachment data cannot be empty",
        ));
    }
    Ok(())
}
