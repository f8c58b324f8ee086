//! Scanner subsystem: language detection and component discovery.
//!
//! The scanner is the entry point of a directory run. It finds
//! `<category>/<Component>/index.tsx` files and hands each one, with its
//! expected component name, to the pipeline.

pub mod language_detect;
pub mod walker;

pub use language_detect::Language;
pub use walker::{discover_components, ComponentTarget};
