//! rendergen-core: errors, configuration, and tracing shared by every rendergen crate.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::RendergenConfig;
