//! Component pipeline: the per-component driver and the directory fan-out.

pub mod component;

pub use component::ComponentPipeline;
