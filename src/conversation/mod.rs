//! Shared conversation history.
//!
//! A [`domain::ConversationState`] is the ordered, append-only log owned by a
//! nexus. Channels only ever see [`domain::ConversationSnapshot`]s, and agents
//! read them through [`domain::ConversationSnapshot::history_for`], which tags
//! every message with its authorship relative to the reader.

pub mod domain;

#[cfg(test)]
mod tests;
