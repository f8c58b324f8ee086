//! Error handling for rendergen.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod format_error;
pub mod generation_error;
pub mod merge_error;
pub mod parse_error;
pub mod resolve_error;
pub mod synthesis_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use format_error::FormatError;
pub use generation_error::{GenerationError, GenerationReport};
pub use merge_error::MergeError;
pub use parse_error::ParseError;
pub use resolve_error::ResolveError;
pub use synthesis_error::SynthesisError;
