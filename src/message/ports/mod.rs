//! Port definitions for the message subsystem.

pub mod validator;
