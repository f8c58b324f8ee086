//! Reconciliation of freshly generated test text with a prior test file.

pub mod merger;

pub use merger::PreservingMerger;

use std::path::Path;

use rendergen_core::errors::MergeError;

/// Combine new text with the file at `existing`, keeping content this engine
/// did not write.
pub trait TestMerger: Send + Sync {
    fn merge(&self, generated: &str, existing: &Path, component: &str) -> Result<String, MergeError>;
}
