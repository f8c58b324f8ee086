//! Per-component generation errors and non-fatal error collection.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};
use super::{ConfigError, FormatError, MergeError, ParseError, ResolveError, SynthesisError};

/// Errors that can occur while generating the test file for one component.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Resolve(e) => e.error_code(),
            Self::Synthesis(e) => e.error_code(),
            Self::Format(e) => e.error_code(),
            Self::Merge(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::WriteFailed { .. } => error_code::IO_FAILURE,
        }
    }
}

/// Result of a multi-component run that accumulates non-fatal errors.
/// Every failure is scoped to one component, so partial results are always returned.
#[derive(Debug, Default)]
pub struct GenerationReport<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Per-component failures, keyed by component name.
    pub errors: Vec<(String, GenerationError)>,
}

impl<T: Default> GenerationReport<T> {
    /// Create a new report around `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Record a failure for `component`.
    pub fn add_error(&mut self, component: impl Into<String>, error: GenerationError) {
        self.errors.push((component.into(), error));
    }

    /// Returns true if no component failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failed components.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
