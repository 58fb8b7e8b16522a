//! Conversation history types.

mod history;
mod snapshot;
mod state;

pub use history::{Authorship, HistoryEntry};
pub use snapshot::ConversationSnapshot;
pub use state::ConversationState;
