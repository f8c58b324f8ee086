//! Configuration system for rendergen.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod output_config;
pub mod rendergen_config;
pub mod resolution_config;
pub mod sampling_config;
pub mod synthesis_config;

pub use output_config::OutputConfig;
pub use rendergen_config::{CliOverrides, RendergenConfig};
pub use resolution_config::ResolutionConfig;
pub use sampling_config::SamplingConfig;
pub use synthesis_config::SynthesisConfig;
