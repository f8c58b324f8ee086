//! External formatter (e.g. `prettier --stdin-filepath x.tsx`).

use std::io::Write;
use std::process::{Command, Stdio};

use rendergen_core::errors::FormatError;

use super::tree_sitter_formatter::TreeSitterFormatter;
use super::SourceFormatter;

/// Pipes text through a command after the built-in syntax check.
pub struct CommandFormatter {
    argv: Vec<String>,
    check: TreeSitterFormatter,
}

impl CommandFormatter {
    pub fn new(argv: Vec<String>, check: TreeSitterFormatter) -> Self {
        Self { argv, check }
    }

    fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    fn failed(&self, message: impl Into<String>) -> FormatError {
        FormatError::CommandFailed {
            command: self.command_line(),
            message: message.into(),
        }
    }
}

impl SourceFormatter for CommandFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError> {
        self.check.validate(text)?;

        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| self.failed("empty command"))?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| self.failed(e.to_string()))?;
        }
        let output = child
            .wait_with_output()
            .map_err(|e| self.failed(e.to_string()))?;
        if !output.status.success() {
            return Err(self.failed(String::from_utf8_lossy(&output.stderr).trim().to_string()));
        }
        String::from_utf8(output.stdout).map_err(|e| self.failed(e.to_string()))
    }
}
