//! Structural component recognition.
//!
//! A declaration is a component when it binds a function whose only
//! parameter destructures named fields and carries a props type. Nothing is
//! looked up by name: the shape alone decides.

use serde::Serialize;
use tree_sitter::Node;

use super::file_index::FileIndex;
use crate::parsers::syntax::{is_function_value, named_children, unparenthesize};
use crate::parsers::{NodeSpan, ParsedFile};
use crate::resolution::declarations::reference_name;
use crate::resolution::TypeReference;

/// How a module hands a component to its importers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportBinding {
    /// `export const Name`, `export { Name }`, or `export { Local as Name }`.
    Named(String),
    /// `export default Name` or `export default function Name`.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    /// Name bound inside the declaring file.
    pub name: String,
    pub props_type: TypeReference,
    pub is_main_target: bool,
    pub exported: bool,
    pub binding: Option<ExportBinding>,
    /// The `variable_declarator`, `function_declaration` or named function
    /// expression binding the component.
    pub span: NodeSpan,
}

impl ComponentDescriptor {
    /// Name importers see: the export alias if there is one, else the local name.
    pub fn public_name(&self) -> &str {
        match &self.binding {
            Some(ExportBinding::Named(name)) => name,
            _ => &self.name,
        }
    }

    pub fn is_default_export(&self) -> bool {
        self.binding == Some(ExportBinding::Default)
    }
}

/// All components declared at the top level of `file`.
pub fn find_components(file: &ParsedFile, target: Option<&str>) -> Vec<ComponentDescriptor> {
    FileIndex::build(file, target).components
}

/// Match one declaration against the component shape.
///
/// `node` is a `function_declaration`, a `variable_declarator`, or a named
/// function expression (`export default function Name`); anything else, or
/// any mismatch, yields `None`.
pub fn recognize(file: &ParsedFile, node: Node<'_>) -> Option<ComponentDescriptor> {
    let name_node = node.child_by_field_name("name")?;
    if name_node.kind() != "identifier" {
        return None;
    }
    let name = file.text(name_node).to_string();

    let function = match node.kind() {
        "function_declaration" | "function_expression" | "function" => node,
        "variable_declarator" => {
            let value = unparenthesize(node.child_by_field_name("value")?);
            if !is_function_value(value) {
                return None;
            }
            value
        }
        _ => return None,
    };

    let Some(props_type) = props_type_of(file, node, function) else {
        tracing::trace!(component = %name, "unrecognized component shape");
        return None;
    };

    Some(ComponentDescriptor {
        name,
        props_type: TypeReference { name: props_type },
        is_main_target: false,
        exported: false,
        binding: None,
        span: NodeSpan::of(node),
    })
}

/// The props type name, if `function` has the component parameter shape.
fn props_type_of(file: &ParsedFile, binding: Node<'_>, function: Node<'_>) -> Option<String> {
    // `x => ...` binds a bare identifier, never a destructuring pattern
    let parameters = function.child_by_field_name("parameters")?;
    let params: Vec<Node<'_>> = named_children(parameters)
        .into_iter()
        .filter(|p| p.kind() != "comment")
        .collect();
    let [param] = params.as_slice() else {
        return None;
    };
    if !matches!(param.kind(), "required_parameter" | "optional_parameter") {
        return None;
    }

    let pattern = param.child_by_field_name("pattern")?;
    if pattern.kind() != "object_pattern" || !is_named_field_pattern(pattern) {
        return None;
    }

    if let Some(annotation) = param.child_by_field_name("type") {
        return reference_name(file, annotation);
    }

    // const Foo: FC<Props> = ({ a }) => ...
    let declared = binding.child_by_field_name("type")?.named_child(0)?;
    if declared.kind() != "generic_type" {
        return None;
    }
    let first_arg = declared
        .child_by_field_name("type_arguments")?
        .named_child(0)?;
    reference_name(file, first_arg)
}

/// Whether every element of an `object_pattern` binds a plain named field.
fn is_named_field_pattern(pattern: Node<'_>) -> bool {
    named_children(pattern).into_iter().all(|element| match element.kind() {
        "shorthand_property_identifier_pattern" | "comment" => true,
        "object_assignment_pattern" => element
            .child_by_field_name("left")
            .is_some_and(|l| l.kind() == "shorthand_property_identifier_pattern"),
        "pair_pattern" => element.child_by_field_name("value").is_some_and(|v| {
            v.kind() == "identifier"
                || (v.kind() == "assignment_pattern"
                    && v.child_by_field_name("left")
                        .is_some_and(|l| l.kind() == "identifier"))
        }),
        "rest_pattern" => element
            .named_child(0)
            .is_some_and(|r| r.kind() == "identifier"),
        _ => false,
    })
}
