//! Source formatting applied once, right before a test file is written.

pub mod command;
pub mod tree_sitter_formatter;

pub use command::CommandFormatter;
pub use tree_sitter_formatter::TreeSitterFormatter;

use rendergen_core::config::OutputConfig;
use rendergen_core::errors::FormatError;

/// Text in, canonically formatted text out.
pub trait SourceFormatter: Send + Sync {
    fn format(&self, text: &str) -> Result<String, FormatError>;
}

/// The formatter selected by `output.formatter_command`.
pub fn formatter_for(config: &OutputConfig) -> Box<dyn SourceFormatter> {
    let builtin = TreeSitterFormatter::new(config.effective_tab_width());
    if config.formatter_command.is_empty() {
        Box::new(builtin)
    } else {
        Box::new(CommandFormatter::new(config.formatter_command.clone(), builtin))
    }
}
