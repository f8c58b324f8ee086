//! ErrorCode trait for structured diagnostics.

/// Every error enum implements this to provide a stable, machine-readable
/// code alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "TYPE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged diagnostic string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const IO_FAILURE: &str = "IO_FAILURE";
pub const TYPE_NOT_FOUND: &str = "TYPE_NOT_FOUND";
pub const IMPORT_CYCLE_DETECTED: &str = "IMPORT_CYCLE_DETECTED";
pub const COMPONENT_NOT_FOUND: &str = "COMPONENT_NOT_FOUND";
pub const FORMATTER_FAILURE: &str = "FORMATTER_FAILURE";
pub const MERGE_ERROR: &str = "MERGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
