//! Prop schema builder.
//!
//! Categories are approximate: keywords map directly, anything else goes
//! through the semantic model's symbol name and an ordered keyword match.

use super::samples::SampleGenerator;
use super::types::{FieldDescriptor, FieldTable, TypeCategory};
use crate::resolution::{StructuredType, TypeShape};
use crate::usage::UsageAnnotation;

/// Best-effort symbol lookup for a declared member type.
pub trait SemanticModel {
    /// Resolved symbol or alias name for `shape`, if any.
    fn symbol_name(&self, shape: &TypeShape) -> Option<String>;
}

/// Symbol names read straight off the syntax; no type checking.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntacticModel;

impl SemanticModel for SyntacticModel {
    fn symbol_name(&self, shape: &TypeShape) -> Option<String> {
        match shape {
            TypeShape::Keyword(keyword) | TypeShape::Literal(keyword) => Some(keyword.clone()),
            TypeShape::Named(name) => Some(name.clone()),
            TypeShape::Array => Some("Array".to_string()),
            TypeShape::Function => Some("Function".to_string()),
            TypeShape::ObjectLiteral => Some("object".to_string()),
            TypeShape::Union(members) => members
                .iter()
                .find(|m| !is_nullish(m))
                .and_then(|m| self.symbol_name(m)),
            TypeShape::Other(_) | TypeShape::Missing => None,
        }
    }
}

fn is_nullish(shape: &TypeShape) -> bool {
    matches!(shape, TypeShape::Keyword(k) if k == "null" || k == "undefined")
}

/// Ordered, case-sensitive; first containment match wins.
const CATEGORY_PATTERNS: &[(&str, TypeCategory)] = &[
    ("string", TypeCategory::String),
    ("number", TypeCategory::Number),
    ("boolean", TypeCategory::Boolean),
    ("object", TypeCategory::Object),
    ("Array", TypeCategory::Array),
    ("Style", TypeCategory::Style),
    ("Function", TypeCategory::Function),
];

/// Category for a type or symbol name.
pub fn categorize(type_name: &str) -> TypeCategory {
    CATEGORY_PATTERNS
        .iter()
        .find(|(pattern, _)| type_name.contains(pattern))
        .map(|(_, category)| *category)
        .unwrap_or(TypeCategory::Unknown)
}

fn category_of(shape: &TypeShape, model: &dyn SemanticModel) -> TypeCategory {
    match shape {
        TypeShape::Keyword(keyword) => categorize(keyword),
        other => model
            .symbol_name(other)
            .map(|name| categorize(&name))
            .unwrap_or(TypeCategory::Unknown),
    }
}

/// One [`FieldDescriptor`] per member of `declaration`, in declaration order.
pub fn build_schema(
    declaration: &StructuredType,
    model: &dyn SemanticModel,
    samples: &mut SampleGenerator,
) -> FieldTable {
    let mut table = FieldTable::new();
    for member in &declaration.members {
        let category = category_of(&member.shape, model);
        table.insert(FieldDescriptor {
            name: member.name.clone(),
            category,
            required: !member.optional,
            sample: samples.sample_for(category),
            type_text: member.type_text.clone(),
            usage: UsageAnnotation::default(),
        });
    }
    table
}
