//! Canonical message format, attribution and validation.
//!
//! - **Domain**: [`domain::Message`], [`domain::Role`], [`domain::ContentPart`],
//!   [`domain::AttributionToken`]
//! - **Ports**: [`ports::validator::MessageValidator`]
//! - **Validation**: [`validation::DefaultMessageValidator`]
//!
//! # Example
//!
//! ```
//! use colloquy::agent::domain::AgentId;
//! use colloquy::message::domain::{ContentPart, Message, Role};
//! use mockable::DefaultClock;
//!
//! let author = AgentId::new();
//! let message = Message::builder(Role::Assistant)
//!     .with_content(ContentPart::text("Draft v1"))
//!     .with_source(author)
//!     .build(&DefaultClock)
//!     .expect("valid message");
//! assert_eq!(message.source(), Some(author));
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
