//! Built-in channel implementations.

pub mod chat_completion;
pub mod scripted;

pub use chat_completion::{ChatCompletionChannel, ChatCompletionChannelFactory};
pub use scripted::{ScriptedChannel, ScriptedChannelFactory};
