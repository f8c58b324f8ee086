//! Formatter errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by the source formatter applied before writing.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Generated text is not valid syntax: {errors} error node(s), first at line {line}")]
    InvalidSyntax { errors: u32, line: u32 },

    #[error("Formatter command `{command}` failed: {message}")]
    CommandFailed { command: String, message: String },
}

impl ErrorCode for FormatError {
    fn error_code(&self) -> &'static str {
        error_code::FORMATTER_FAILURE
    }
}
