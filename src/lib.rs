//! Colloquy: multi-agent conversation coordination.
//!
//! This crate lets heterogeneous agents take turns in one shared, ordered
//! conversation. Each agent kind is reached through a channel; a nexus owns
//! the history, creates channels on demand and commits every produced
//! message in the order it was produced.
//!
//! # Architecture
//!
//! Colloquy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no runtime dependencies
//! - **Ports**: Trait contracts for completion connectors and channels
//! - **Adapters**: Built-in channels for chat-completion and scripted agents
//!
//! # Modules
//!
//! - [`message`]: Canonical message format, attribution and validation
//! - [`agent`]: Participants and the completion connector port
//! - [`conversation`]: Append-only history and per-agent views of it
//! - [`channel`]: The turn protocol, channel factories and their registry
//! - [`nexus`]: The coordinator driving turns

pub mod agent;
pub mod channel;
pub mod conversation;
pub mod message;
pub mod nexus;
