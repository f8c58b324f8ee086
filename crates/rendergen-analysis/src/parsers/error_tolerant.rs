//! Error-tolerant parsing: locate ERROR and MISSING nodes in a tree.

use tree_sitter::Node;

use super::types::Range;

/// Count ERROR and MISSING nodes in a tree-sitter tree.
pub fn count_errors(root: Node<'_>) -> (u32, Vec<Range>) {
    let mut count = 0u32;
    let mut ranges = Vec::new();
    collect_errors(root, &mut count, &mut ranges);
    (count, ranges)
}

fn collect_errors(node: Node<'_>, count: &mut u32, ranges: &mut Vec<Range>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        ranges.push(Range::from_ts_node(&node));
    }
    // Clean subtrees need no walk.
    if !node.has_error() {
        return;
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i as _) {
            collect_errors(child, count, ranges);
        }
    }
}

