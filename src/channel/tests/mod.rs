//! Unit tests for channels and the channel registry.
