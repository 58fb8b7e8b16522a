//! Lifecycle status and turn outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a nexus. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NexusStatus {
    /// No message has been committed yet.
    Empty,
    /// At least one message has been committed.
    Active,
    /// Closed; registration and invocation are refused.
    Closed,
}

impl NexusStatus {
    /// Returns the status as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for NexusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The agent finished producing.
    Completed {
        /// Messages committed during the turn, priming included.
        appended: usize,
    },
    /// The caller cancelled the turn; queued messages were discarded.
    Cancelled {
        /// Messages committed before cancellation, priming included.
        appended: usize,
    },
}

impl TurnOutcome {
    /// Returns the number of messages committed during the turn.
    #[must_use]
    pub const fn appended(self) -> usize {
        match self {
            Self::Completed { appended } | Self::Cancelled { appended } => appended,
        }
    }

    /// Returns `true` when the turn was cancelled.
    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
