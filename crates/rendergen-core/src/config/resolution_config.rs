//! Type resolution configuration.

use serde::{Deserialize, Serialize};

/// Configuration for cross-file type resolution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Maximum import hops followed before giving up. Default: 8.
    pub max_import_depth: Option<u32>,
    /// Extensions tried when an import specifier has none.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl ResolutionConfig {
    /// Returns the effective import depth bound, defaulting to 8.
    pub fn effective_max_import_depth(&self) -> u32 {
        self.max_import_depth.unwrap_or(8)
    }

    /// Returns the extensions tried for extensionless specifiers.
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            ["ts", "tsx", "d.ts", "js", "jsx"]
                .iter()
                .map(|e| e.to_string())
                .collect()
        } else {
            self.extensions.clone()
        }
    }
}
