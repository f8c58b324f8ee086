//! Top-level rendergen configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutputConfig, ResolutionConfig, SamplingConfig, SynthesisConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "rendergen.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RENDERGEN_*`)
/// 3. Project config (`rendergen.toml` in project root)
/// 4. User config (`~/.rendergen/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RendergenConfig {
    pub synthesis: SynthesisConfig,
    pub resolution: ResolutionConfig,
    pub output: OutputConfig,
    pub sampling: SamplingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub merge_existing: Option<bool>,
    pub test_extension: Option<String>,
}

impl RendergenConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RendergenConfig) -> Result<(), ConfigError> {
        if let Some(depth) = config.resolution.max_import_depth {
            if !(1..=64).contains(&depth) {
                return Err(ConfigError::ValidationFailed {
                    field: "resolution.max_import_depth".to_string(),
                    message: "must be between 1 and 64".to_string(),
                });
            }
        }
        if let Some(width) = config.output.tab_width {
            if !(1..=16).contains(&width) {
                return Err(ConfigError::ValidationFailed {
                    field: "output.tab_width".to_string(),
                    message: "must be between 1 and 16".to_string(),
                });
            }
        }
        if let Some(ref ext) = config.output.test_extension {
            if ext.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.test_extension".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".rendergen").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RendergenConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RendergenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut RendergenConfig, other: &RendergenConfig) {
        // Synthesis
        if other.synthesis.render_module.is_some() {
            base.synthesis.render_module = other.synthesis.render_module.clone();
        }
        if other.synthesis.helpers_module.is_some() {
            base.synthesis.helpers_module = other.synthesis.helpers_module.clone();
        }
        if other.synthesis.lookup_helper.is_some() {
            base.synthesis.lookup_helper = other.synthesis.lookup_helper.clone();
        }
        if other.synthesis.strip_affix.is_some() {
            base.synthesis.strip_affix = other.synthesis.strip_affix.clone();
        }
        if other.synthesis.test_id_attribute.is_some() {
            base.synthesis.test_id_attribute = other.synthesis.test_id_attribute.clone();
        }

        // Resolution
        if other.resolution.max_import_depth.is_some() {
            base.resolution.max_import_depth = other.resolution.max_import_depth;
        }
        if !other.resolution.extensions.is_empty() {
            base.resolution.extensions = other.resolution.extensions.clone();
        }

        // Output
        if other.output.tests_dir.is_some() {
            base.output.tests_dir = other.output.tests_dir.clone();
        }
        if other.output.test_extension.is_some() {
            base.output.test_extension = other.output.test_extension.clone();
        }
        if other.output.tab_width.is_some() {
            base.output.tab_width = other.output.tab_width;
        }
        if other.output.merge_existing.is_some() {
            base.output.merge_existing = other.output.merge_existing;
        }
        if !other.output.formatter_command.is_empty() {
            base.output.formatter_command = other.output.formatter_command.clone();
        }

        // Sampling
        if other.sampling.seed.is_some() {
            base.sampling.seed = other.sampling.seed;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut RendergenConfig) {
        if let Ok(val) = std::env::var("RENDERGEN_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.sampling.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RENDERGEN_MAX_IMPORT_DEPTH") {
            if let Ok(v) = val.parse::<u32>() {
                config.resolution.max_import_depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RENDERGEN_TEST_EXTENSION") {
            config.output.test_extension = Some(val);
        }
        if let Ok(val) = std::env::var("RENDERGEN_MERGE_EXISTING") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.merge_existing = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RendergenConfig, cli: &CliOverrides) {
        if let Some(v) = cli.seed {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = cli.merge_existing {
            config.output.merge_existing = Some(v);
        }
        if let Some(ref v) = cli.test_extension {
            config.output.test_extension = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
