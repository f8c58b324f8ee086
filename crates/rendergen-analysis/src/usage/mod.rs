//! Usage classification: how each field is consumed in a component body.

pub mod classifier;
pub mod types;

pub use classifier::UsageClassifier;
pub use types::{UsageAnnotation, UsageContext};
