//! Sample value configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the sample value generator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Fixed seed. When unset, every run draws fresh literals.
    pub seed: Option<u64>,
}
