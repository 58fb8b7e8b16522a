//! Unit tests for conversation history.
