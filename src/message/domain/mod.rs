//! Domain types for the message subsystem.
//!
//! Pure value types with no runtime dependencies. All of them are immutable
//! after construction and serialisable via serde.

mod attribution;
mod content;
mod ids;
mod message;
mod metadata;
mod role;

pub use attribution::{AttributionToken, ParseAttributionError};
pub use content::{AttachmentPart, ContentPart, TextPart, ToolCallPart, ToolResultPart};
pub use ids::MessageId;
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use metadata::{MessageMetadata, RESERVED_METADATA_KEYS};
pub use role::{ParseRoleError, Role};
