//! Output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for where and how generated test files are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Sibling directory receiving test files. Default: `__tests__`.
    pub tests_dir: Option<String>,
    /// Extension of generated test files. Default: `tsx`.
    pub test_extension: Option<String>,
    /// Indentation width used by the built-in formatter. Default: 4.
    pub tab_width: Option<u32>,
    /// Reconcile with an existing test file instead of overwriting it. Default: true.
    pub merge_existing: Option<bool>,
    /// External formatter command (program followed by arguments). Empty: built-in formatter.
    #[serde(default)]
    pub formatter_command: Vec<String>,
}

impl OutputConfig {
    pub fn effective_tests_dir(&self) -> &str {
        self.tests_dir.as_deref().unwrap_or("__tests__")
    }

    pub fn effective_test_extension(&self) -> &str {
        self.test_extension.as_deref().unwrap_or("tsx")
    }

    pub fn effective_tab_width(&self) -> u32 {
        self.tab_width.unwrap_or(4)
    }

    pub fn effective_merge_existing(&self) -> bool {
        self.merge_existing.unwrap_or(true)
    }
}
