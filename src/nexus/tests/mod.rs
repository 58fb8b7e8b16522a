//! Unit tests for the nexus.
