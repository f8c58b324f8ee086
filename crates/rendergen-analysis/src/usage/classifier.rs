//! UsageClassifier: annotate each field with how the component body uses it.
//!
//! One pre-order walk over the component's declaring node with an explicit
//! ancestor stack. At every named node whose text mentions a field, the
//! first matching rule decides that node's context; across nodes the last
//! decision stands. Fields no rule ever fires for keep the default.

use tree_sitter::Node;

use super::types::{UsageAnnotation, UsageContext};
use crate::parsers::syntax::{attribute_name, is_function_value, is_markup_element, markup_attributes};
use crate::parsers::ParsedFile;
use crate::props::FieldTable;
use crate::synthesis::naming::event_name;

pub struct UsageClassifier<'a> {
    test_id_attribute: &'a str,
}

impl<'a> UsageClassifier<'a> {
    pub fn new(test_id_attribute: &'a str) -> Self {
        Self { test_id_attribute }
    }

    /// Classify every field in `fields` against the subtree rooted at `declaration`.
    pub fn classify(&self, file: &ParsedFile, declaration: Node<'_>, fields: &mut FieldTable) {
        let mut cursor = declaration.walk();
        let mut ancestors: Vec<Node<'_>> = Vec::new();

        loop {
            let node = cursor.node();
            if node.is_named() {
                self.visit(file, node, &ancestors, declaration, fields);
            }

            if cursor.goto_first_child() {
                ancestors.push(node);
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
                ancestors.pop();
            }
        }
    }

    fn visit(
        &self,
        file: &ParsedFile,
        node: Node<'_>,
        ancestors: &[Node<'_>],
        declaration: Node<'_>,
        fields: &mut FieldTable,
    ) {
        let text = file.text(node);
        let parent = ancestors.last().copied();

        for field in fields.iter_mut() {
            if !text.contains(field.name.as_str()) {
                continue;
            }
            let Some(context) = self.rule(file, node, parent, declaration, &field.name) else {
                continue;
            };
            field.usage = UsageAnnotation {
                context,
                has_test_identifier: self.nearest_element_has_test_id(file, node, ancestors),
                classified: true,
            };
        }
    }

    fn rule(
        &self,
        file: &ParsedFile,
        node: Node<'_>,
        parent: Option<Node<'_>>,
        declaration: Node<'_>,
        field: &str,
    ) -> Option<UsageContext> {
        if node.kind() == "jsx_attribute" {
            let name = attribute_name(node).map(|n| file.text(n)).unwrap_or("");
            return Some(if name == "style" {
                UsageContext::StyleOrClassName
            } else if is_event_attribute(name) {
                UsageContext::EventHandlerOrFunction
            } else {
                UsageContext::AsProp
            });
        }

        let parent = parent?;

        if node.kind() == "jsx_expression" && parent.kind() == "jsx_element" {
            return Some(UsageContext::AsText);
        }

        if parent.kind() == "jsx_expression" {
            if node.kind() == "call_expression"
                && node
                    .child_by_field_name("function")
                    .is_some_and(|callee| file.text(callee) == field)
            {
                return Some(UsageContext::EventHandlerOrFunction);
            }
            if is_function_value(node) {
                return Some(UsageContext::EventHandlerOrFunction);
            }
            if node.kind() == "ternary_expression" || is_logical_and(file, node) {
                return Some(UsageContext::ConditionalRendering);
            }
        }

        if parent.id() == declaration.id() {
            return Some(UsageContext::Container);
        }

        None
    }

    fn nearest_element_has_test_id(
        &self,
        file: &ParsedFile,
        node: Node<'_>,
        ancestors: &[Node<'_>],
    ) -> bool {
        let element = std::iter::once(node)
            .chain(ancestors.iter().rev().copied())
            .find(|n| is_markup_element(*n));
        let Some(element) = element else {
            return false;
        };
        markup_attributes(element).into_iter().any(|attribute| {
            attribute_name(attribute).is_some_and(|n| file.text(n) == self.test_id_attribute)
        })
    }
}

/// `onPress`, `onChangeText`, ...
fn is_event_attribute(name: &str) -> bool {
    event_name(name).is_some()
}

fn is_logical_and(file: &ParsedFile, node: Node<'_>) -> bool {
    node.kind() == "binary_expression"
        && node
            .child_by_field_name("operator")
            .is_some_and(|op| file.text(op) == "&&")
}
