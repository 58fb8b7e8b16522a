//! Message validation applied before a produced message is committed.

pub mod rules;
pub mod service;

pub use service::DefaultMessageValidator;
