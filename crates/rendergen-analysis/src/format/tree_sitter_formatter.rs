//! Built-in formatter: syntax check plus whitespace normalization.

use std::path::Path;

use rendergen_core::errors::FormatError;

use super::SourceFormatter;
use crate::parsers::error_tolerant::count_errors;
use crate::parsers::ParserManager;
use crate::scanner::language_detect::Language;

#[derive(Debug, Clone, Copy)]
pub struct TreeSitterFormatter {
    tab_width: usize,
}

impl TreeSitterFormatter {
    pub fn new(tab_width: u32) -> Self {
        Self {
            tab_width: tab_width.max(1) as usize,
        }
    }

    /// Fail with `InvalidSyntax` unless `text` parses cleanly as TSX.
    pub fn validate(&self, text: &str) -> Result<(), FormatError> {
        let parsed = ParserManager::new()
            .parse_as(text.to_string(), Path::new("generated.tsx"), Language::Tsx)
            .map_err(|e| FormatError::CommandFailed {
                command: "tree-sitter".to_string(),
                message: e.to_string(),
            })?;
        let (errors, ranges) = count_errors(parsed.root());
        if errors > 0 {
            let line = ranges.first().map(|r| r.start.line + 1).unwrap_or(0);
            return Err(FormatError::InvalidSyntax { errors, line });
        }
        Ok(())
    }

    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut blank_run = 0usize;
        for line in text.lines() {
            let line = self.expand_indent(line);
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 || out.is_empty() {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            out.push_str(line);
            out.push('\n');
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }

    /// Leading tabs only; tabs inside literals are left alone.
    fn expand_indent(&self, line: &str) -> String {
        let body = line.trim_start_matches('\t');
        let tabs = line.len() - body.len();
        let mut expanded = " ".repeat(tabs * self.tab_width);
        expanded.push_str(body);
        expanded
    }
}

impl SourceFormatter for TreeSitterFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError> {
        self.validate(text)?;
        Ok(self.normalize(text))
    }
}
