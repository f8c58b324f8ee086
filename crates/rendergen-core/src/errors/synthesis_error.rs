//! Synthesis errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while assembling a component bundle into test text.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Component {name} not found in {path}")]
    ComponentNotFound { name: String, path: PathBuf },
}

impl ErrorCode for SynthesisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ComponentNotFound { .. } => error_code::COMPONENT_NOT_FOUND,
        }
    }
}
