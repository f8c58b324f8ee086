//! Type resolution errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};
use super::ParseError;

/// Errors that can occur while locating a props type declaration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Cannot locate {type_name} from {path}. Have you exported it correctly?")]
    TypeNotFound { type_name: String, path: PathBuf },

    #[error("Import chain for {type_name} exceeded depth {depth} at {path}")]
    ImportCycleDetected {
        type_name: String,
        depth: u32,
        path: PathBuf,
    },

    #[error("Parse error while resolving: {0}")]
    Parse(#[from] ParseError),
}

impl ErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TypeNotFound { .. } => error_code::TYPE_NOT_FOUND,
            Self::ImportCycleDetected { .. } => error_code::IMPORT_CYCLE_DETECTED,
            Self::Parse(e) => e.error_code(),
        }
    }
}
