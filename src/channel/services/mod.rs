//! Channel services.

mod registry;

pub use registry::ChannelRegistry;
