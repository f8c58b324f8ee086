//! Extraction of structured type declarations from a parsed file.

use tree_sitter::Node;

use super::types::{MemberSignature, StructuredType, TypeShape};
use crate::parsers::syntax::{has_token, named_children, unquote};
use crate::parsers::{NodeSpan, ParsedFile};

/// Build a [`StructuredType`] from an `interface_declaration` or an object
/// `type_alias_declaration`. Other declarations yield `None`.
pub fn structured_type(file: &ParsedFile, node: Node<'_>, exported: bool) -> Option<StructuredType> {
    let name = file.text(node.child_by_field_name("name")?).to_string();
    let (body, extends) = match node.kind() {
        "interface_declaration" => {
            let body = node.child_by_field_name("body")?;
            (body, extends_clause(file, node))
        }
        "type_alias_declaration" => {
            let value = node.child_by_field_name("value")?;
            if value.kind() != "object_type" {
                return None;
            }
            (value, Vec::new())
        }
        _ => return None,
    };

    let members = named_children(body)
        .into_iter()
        .filter_map(|member| member_signature(file, member))
        .collect();

    Some(StructuredType {
        name,
        exported,
        members,
        extends,
        span: NodeSpan::of(node),
    })
}

/// Base type names of an `interface ... extends A, B<T>` clause.
fn extends_clause(file: &ParsedFile, node: Node<'_>) -> Vec<String> {
    named_children(node)
        .into_iter()
        .filter(|c| c.kind() == "extends_type_clause")
        .flat_map(named_children)
        .filter_map(|base| reference_name(file, base))
        .collect()
}

fn member_signature(file: &ParsedFile, member: Node<'_>) -> Option<MemberSignature> {
    let name_node = member.child_by_field_name("name")?;
    let name = unquote(file.text(name_node)).to_string();
    let optional = has_token(member, "?");

    match member.kind() {
        "property_signature" => {
            let type_node = member
                .child_by_field_name("type")
                .and_then(|annotation| annotation.named_child(0));
            let (type_text, shape) = match type_node {
                Some(t) => (file.text(t).to_string(), shape_of(file, t)),
                None => ("any".to_string(), TypeShape::Missing),
            };
            Some(MemberSignature {
                name,
                optional,
                type_text,
                shape,
            })
        }
        "method_signature" => Some(MemberSignature {
            name,
            optional,
            type_text: file.text(member).trim_end_matches([';', ',']).to_string(),
            shape: TypeShape::Function,
        }),
        _ => None,
    }
}

/// Name of a referenced type: plain, qualified (last segment), or generic (base).
pub fn reference_name(file: &ParsedFile, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "type_identifier" | "identifier" => Some(file.text(node).to_string()),
        "nested_type_identifier" | "member_expression" => {
            let last = node
                .child_by_field_name("name")
                .or_else(|| node.child_by_field_name("property"))?;
            Some(file.text(last).to_string())
        }
        "generic_type" => reference_name(file, node.child_by_field_name("name")?),
        "type_annotation" | "parenthesized_type" => reference_name(file, node.named_child(0)?),
        _ => None,
    }
}

/// Classify the syntactic shape of a type node.
pub fn shape_of(file: &ParsedFile, node: Node<'_>) -> TypeShape {
    match node.kind() {
        "predefined_type" => TypeShape::Keyword(file.text(node).to_string()),
        "type_identifier" | "nested_type_identifier" | "generic_type" => {
            match reference_name(file, node) {
                Some(name) => TypeShape::Named(name),
                None => TypeShape::Other(file.text(node).to_string()),
            }
        }
        "array_type" | "tuple_type" => TypeShape::Array,
        "readonly_type" => match node.named_child(0) {
            Some(inner) => shape_of(file, inner),
            None => TypeShape::Other(file.text(node).to_string()),
        },
        "function_type" | "constructor_type" => TypeShape::Function,
        "object_type" => TypeShape::ObjectLiteral,
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => shape_of(file, inner),
            None => TypeShape::Missing,
        },
        "union_type" => {
            let mut members = Vec::new();
            flatten_union(file, node, &mut members);
            TypeShape::Union(members)
        }
        "literal_type" => literal_shape(file, node),
        "null" | "undefined" => TypeShape::Keyword(node.kind().to_string()),
        _ => TypeShape::Other(file.text(node).to_string()),
    }
}

/// Unions nest left-associatively (`A | B | C` is `(A | B) | C`).
fn flatten_union(file: &ParsedFile, node: Node<'_>, out: &mut Vec<TypeShape>) {
    for member in named_children(node) {
        if member.kind() == "union_type" {
            flatten_union(file, member, out);
        } else {
            out.push(shape_of(file, member));
        }
    }
}

fn literal_shape(file: &ParsedFile, node: Node<'_>) -> TypeShape {
    let Some(value) = node.named_child(0) else {
        return TypeShape::Other(file.text(node).to_string());
    };
    match value.kind() {
        "string" | "template_string" => TypeShape::Literal("string".to_string()),
        "number" | "unary_expression" => TypeShape::Literal("number".to_string()),
        "true" | "false" => TypeShape::Literal("boolean".to_string()),
        "null" | "undefined" => TypeShape::Keyword(value.kind().to_string()),
        _ => TypeShape::Other(file.text(node).to_string()),
    }
}
