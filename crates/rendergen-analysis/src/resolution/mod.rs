//! Type resolution: find the structured type behind a component's props
//! annotation, locally or by following imports into other files.

pub mod declarations;
pub mod resolver;
pub mod types;

pub use resolver::TypeResolver;
pub use types::{
    MemberSignature, ResolvedType, StructuredType, TypeLocation, TypeReference, TypeShape,
};
