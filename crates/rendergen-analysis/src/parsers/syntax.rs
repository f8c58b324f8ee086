//! Small helpers over tree-sitter nodes.

use tree_sitter::Node;

/// Named children of `node`, collected so the cursor borrow ends here.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// All children of `node`, anonymous tokens included.
pub fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Whether `node` has a direct anonymous token child of kind `token`.
pub fn has_token(node: Node<'_>, token: &str) -> bool {
    children(node)
        .into_iter()
        .any(|c| !c.is_named() && c.kind() == token)
}

/// Strip one layer of matching quotes from a string literal.
pub fn unquote(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|t| t.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// Descend through `parenthesized_expression` wrappers.
pub fn unparenthesize(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        match current.named_child(0) {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// Whether `node` is a function value: arrow function or function expression.
pub fn is_function_value(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function"
    )
}

/// Whether `node` is a markup element of any form.
pub fn is_markup_element(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "jsx_element" | "jsx_opening_element" | "jsx_self_closing_element"
    )
}

/// Attributes of a markup element. For `jsx_element` the opening tag's are used.
pub fn markup_attributes<'t>(element: Node<'t>) -> Vec<Node<'t>> {
    let tag = if element.kind() == "jsx_element" {
        match element.child_by_field_name("open_tag") {
            Some(open) => open,
            None => return Vec::new(),
        }
    } else {
        element
    };
    named_children(tag)
        .into_iter()
        .filter(|c| c.kind() == "jsx_attribute")
        .collect()
}

/// Name node of a `jsx_attribute` (first named child).
pub fn attribute_name<'t>(attribute: Node<'t>) -> Option<Node<'t>> {
    attribute.named_child(0)
}
