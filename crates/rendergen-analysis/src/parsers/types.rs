//! Parse output shared by every downstream stage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

use crate::scanner::language_detect::Language;

/// A parsed source file: owns its text and syntax tree.
///
/// Nodes borrowed from `tree` are only valid while the `ParsedFile` lives;
/// stages that need to refer back to a node later keep a [`NodeSpan`].
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub language: Language,
    pub source: String,
    pub tree: Tree,
    pub parse_time_us: u64,
    pub error_count: u32,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of `node`. Invalid UTF-8 slices read as empty.
    pub fn text<'a>(&'a self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Find the node previously recorded as `span`.
    pub fn node_at(&self, span: &NodeSpan) -> Option<Node<'_>> {
        let mut node = self
            .root()
            .descendant_for_byte_range(span.start_byte, span.end_byte)?;
        loop {
            if node.kind() == span.kind
                && node.start_byte() == span.start_byte
                && node.end_byte() == span.end_byte
            {
                return Some(node);
            }
            node = node.parent()?;
        }
    }
}

/// A stable reference to a node inside a [`ParsedFile`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeSpan {
    pub start_byte: usize,
    pub end_byte: usize,
    pub kind: String,
}

impl NodeSpan {
    pub fn of(node: Node<'_>) -> Self {
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            kind: node.kind().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn from_ts_node(node: &Node<'_>) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start: Position {
                line: start.row as u32,
                column: start.column as u32,
            },
            end: Position {
                line: end.row as u32,
                column: end.column as u32,
            },
        }
    }
}
