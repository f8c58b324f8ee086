//! Structured type declarations and resolution results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parsers::NodeSpan;

/// A props type as named by a component's parameter annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: String,
}

/// Syntactic shape of a member's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    /// Built-in keyword: `string`, `number`, `boolean`, `object`, `any`, ...
    Keyword(String),
    /// A named reference; generics keep their base name, qualified names their last segment.
    Named(String),
    /// `T[]`, `readonly T[]`, or a tuple.
    Array,
    /// `(...) => R` or a method signature.
    Function,
    /// `{ ... }` type literal.
    ObjectLiteral,
    /// `A | B | ...`
    Union(Vec<TypeShape>),
    /// A literal type; carries the keyword of its value (`'a'` → `string`).
    Literal(String),
    /// Anything else, kept as written.
    Other(String),
    /// No annotation (implicit `any`).
    Missing,
}

/// One field signature of a structured type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSignature {
    pub name: String,
    pub optional: bool,
    pub type_text: String,
    pub shape: TypeShape,
}

/// An `interface` or object-literal `type` alias declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredType {
    pub name: String,
    pub exported: bool,
    pub members: Vec<MemberSignature>,
    /// Base types named in an `extends` clause.
    pub extends: Vec<String>,
    pub span: NodeSpan,
}

impl StructuredType {
    /// Fold `base` members in front of this type's own; own members win in place.
    pub fn inherit(&mut self, base: &[MemberSignature]) {
        let mut merged: Vec<MemberSignature> = Vec::with_capacity(base.len() + self.members.len());
        for member in base {
            match self.members.iter().find(|m| m.name == member.name) {
                Some(own) => merged.push(own.clone()),
                None => merged.push(member.clone()),
            }
        }
        for member in &self.members {
            if !merged.iter().any(|m| m.name == member.name) {
                merged.push(member.clone());
            }
        }
        self.members = merged;
    }
}

/// Where a resolved type can be imported from, relative to the component file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLocation {
    /// Declared in the component file itself.
    Local,
    /// Imported by the component file.
    Imported {
        /// Specifier as written in the component file.
        specifier: String,
        /// File the specifier resolved to.
        module_path: PathBuf,
    },
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    /// Name under which the type is importable from `location`. For a
    /// default import this is the local binding name.
    pub name: String,
    /// Imported as the module's default export (`import Props from '...'`).
    pub default_import: bool,
    pub exported: bool,
    pub location: TypeLocation,
    /// File holding the declaration (after following re-exports).
    pub defining_file: PathBuf,
    pub declaration: StructuredType,
}
