//! Synthesis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the test synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Module supplying `render`. Default: `@testing-library/react-native`.
    pub render_module: Option<String>,
    /// Lookup helper module, relative to the project root. Default: `src/utils/jest/helpers`.
    pub helpers_module: Option<String>,
    /// Name of the structural/text lookup helper. Default: `findByObjectOrText`.
    pub lookup_helper: Option<String>,
    /// Literal stripped from a component name when deriving the suite name. Default: `Prefix`.
    pub strip_affix: Option<String>,
    /// Markup attribute used as the test identifier. Default: `testID`.
    pub test_id_attribute: Option<String>,
}

impl SynthesisConfig {
    pub fn effective_render_module(&self) -> &str {
        self.render_module
            .as_deref()
            .unwrap_or("@testing-library/react-native")
    }

    pub fn effective_helpers_module(&self) -> &str {
        self.helpers_module
            .as_deref()
            .unwrap_or("src/utils/jest/helpers")
    }

    pub fn effective_lookup_helper(&self) -> &str {
        self.lookup_helper.as_deref().unwrap_or("findByObjectOrText")
    }

    pub fn effective_strip_affix(&self) -> &str {
        self.strip_affix.as_deref().unwrap_or("Prefix")
    }

    pub fn effective_test_id_attribute(&self) -> &str {
        self.test_id_attribute.as_deref().unwrap_or("testID")
    }
}
