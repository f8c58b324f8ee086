//! Prop schema: field table, type categories, and sample literals.

pub mod samples;
pub mod schema;
pub mod types;

pub use samples::SampleGenerator;
pub use schema::{build_schema, categorize, SemanticModel, SyntacticModel};
pub use types::{FieldDescriptor, FieldTable, TypeCategory};
