//! Port contracts for agents.

pub mod completion;

pub use completion::{
    Completion, CompletionError, CompletionOutput, CompletionRequest, CompletionResult,
    CompletionService,
};

#[cfg(test)]
pub use completion::MockCompletionService;
