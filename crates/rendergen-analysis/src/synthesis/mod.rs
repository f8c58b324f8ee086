//! Test synthesis: turn an analyzed component bundle into jest test text.

pub mod bundle;
pub mod generator;
pub mod imports;
pub mod naming;

pub use bundle::{AnalyzedComponent, ComponentBundle};
pub use generator::{OutputLocation, TestSynthesizer};
pub use imports::ImportPlan;
