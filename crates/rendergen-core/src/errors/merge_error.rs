//! Merge errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while reconciling with a previously generated test file.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Failed to read existing test file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Existing test file {path} has {errors} syntax error(s); refusing to overwrite")]
    UnparseableExisting { path: PathBuf, errors: u32 },
}

impl ErrorCode for MergeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } => error_code::IO_FAILURE,
            Self::UnparseableExisting { .. } => error_code::MERGE_ERROR,
        }
    }
}
