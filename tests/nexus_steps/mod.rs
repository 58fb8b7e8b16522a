//! Step definitions for nexus behaviour tests.

mod given;
mod then;
mod when;
