//! Component recognition: which top-level declarations are UI components,
//! plus the per-file index of exports, imports and local structured types.

pub mod file_index;
pub mod recognizer;

pub use file_index::{FileIndex, ImportBinding, ReExport, DEFAULT_EXPORT};
pub use recognizer::{find_components, recognize, ComponentDescriptor, ExportBinding};
