//! rendergen-analysis: the component introspection and test synthesis engine.
//!
//! Pipeline per component, strictly sequential:
//! recognize → resolve props type → build field schema → classify usage →
//! synthesize test text → merge with prior output → format → write.

pub mod components;
pub mod format;
pub mod parsers;
pub mod pipeline;
pub mod props;
pub mod reconcile;
pub mod resolution;
pub mod scanner;
pub mod synthesis;
pub mod usage;

pub use pipeline::ComponentPipeline;
