//! PreservingMerger: keep hand-written content across regenerations.
//!
//! From the prior file it keeps imports of names the new text does not
//! import, top-level statements other than imports, render helpers and the
//! engine's describe block, and every statement inside that describe block
//! that is not an engine-titled test. Kept pieces are spliced into the new
//! text after its imports, before its describe block, and at the end of the
//! describe body respectively.

use std::path::Path;

use rustc_hash::FxHashSet;
use tree_sitter::Node;

use rendergen_core::errors::MergeError;

use super::TestMerger;
use crate::parsers::syntax::{named_children, unquote};
use crate::parsers::{ParsedFile, ParserManager};
use crate::scanner::language_detect::Language;
use crate::synthesis::naming::{describe_title, is_generated_title};

pub struct PreservingMerger {
    strip_affix: String,
}

/// Byte offsets in the generated text where preserved content goes.
struct Anchors {
    after_imports: usize,
    before_describe: usize,
    describe_body_end: usize,
}

impl PreservingMerger {
    pub fn new(strip_affix: impl Into<String>) -> Self {
        Self {
            strip_affix: strip_affix.into(),
        }
    }

    /// Merge against prior text already in memory.
    pub fn merge_text(
        &self,
        generated: &str,
        existing: &str,
        existing_path: &Path,
        component: &str,
    ) -> Result<String, MergeError> {
        let manager = ParserManager::new();
        let prior = manager
            .parse_as(existing.to_string(), existing_path, Language::Tsx)
            .map_err(|_| MergeError::UnparseableExisting {
                path: existing_path.to_path_buf(),
                errors: 1,
            })?;
        if prior.has_errors() {
            return Err(MergeError::UnparseableExisting {
                path: existing_path.to_path_buf(),
                errors: prior.error_count,
            });
        }

        let fresh = match manager.parse_as(
            generated.to_string(),
            Path::new("generated.tsx"),
            Language::Tsx,
        ) {
            Ok(parsed) if !parsed.has_errors() => parsed,
            _ => return Ok(generated.to_string()),
        };

        let title = describe_title(component, &self.strip_affix);
        let Some(anchors) = anchors(&fresh, &title) else {
            return Ok(generated.to_string());
        };
        let imported = imported_names(&fresh);
        let modules = imported_modules(&fresh);

        let mut kept_imports = Vec::new();
        let mut kept_top = Vec::new();
        let mut kept_tests = Vec::new();

        for statement in named_children(prior.root()) {
            match statement.kind() {
                "import_statement" => {
                    if let Some(line) = preserved_import(&prior, statement, &imported, &modules) {
                        kept_imports.push(line);
                    }
                }
                _ if is_render_helper(&prior, statement) => {}
                _ => match describe_body(&prior, statement, &title) {
                    Some(body) => {
                        for inner in named_children(body) {
                            if !is_generated_test(&prior, inner, component) {
                                kept_tests.push(prior.text(inner).to_string());
                            }
                        }
                    }
                    None => kept_top.push(prior.text(statement).to_string()),
                },
            }
        }

        tracing::debug!(
            component,
            imports = kept_imports.len(),
            statements = kept_top.len(),
            tests = kept_tests.len(),
            "preserving prior content"
        );

        let mut merged = generated.to_string();
        if !kept_tests.is_empty() {
            let block = format!("\n\t{}\n", kept_tests.join("\n\n\t"));
            merged.insert_str(anchors.describe_body_end, &block);
        }
        if !kept_top.is_empty() {
            let block = format!("{}\n\n", kept_top.join("\n\n"));
            merged.insert_str(anchors.before_describe, &block);
        }
        if !kept_imports.is_empty() {
            let block = format!("\n{}", kept_imports.join("\n"));
            merged.insert_str(anchors.after_imports, &block);
        }
        Ok(merged)
    }
}

impl TestMerger for PreservingMerger {
    fn merge(&self, generated: &str, existing: &Path, component: &str) -> Result<String, MergeError> {
        let prior = std::fs::read_to_string(existing).map_err(|source| MergeError::ReadFailed {
            path: existing.to_path_buf(),
            source,
        })?;
        self.merge_text(generated, &prior, existing, component)
    }
}

fn anchors(fresh: &ParsedFile, title: &str) -> Option<Anchors> {
    let statements = named_children(fresh.root());
    let after_imports = statements
        .iter()
        .filter(|s| s.kind() == "import_statement")
        .map(|s| s.end_byte())
        .max()?;
    let describe = statements
        .iter()
        .find(|s| describe_body(fresh, **s, title).is_some())?;
    let body = describe_body(fresh, *describe, title)?;
    Some(Anchors {
        after_imports,
        before_describe: describe.start_byte(),
        describe_body_end: body.end_byte().checked_sub(1)?,
    })
}

/// `name(args)` at statement level: callee name and argument nodes.
fn call_statement<'t>(file: &ParsedFile, statement: Node<'t>) -> Option<(String, Vec<Node<'t>>)> {
    if statement.kind() != "expression_statement" {
        return None;
    }
    let call = statement.named_child(0)?;
    if call.kind() != "call_expression" {
        return None;
    }
    let callee = file.text(call.child_by_field_name("function")?).to_string();
    let args = named_children(call.child_by_field_name("arguments")?);
    Some((callee, args))
}

fn string_argument(file: &ParsedFile, args: &[Node<'_>]) -> Option<String> {
    let first = args.first()?;
    matches!(first.kind(), "string" | "template_string").then(|| unquote(file.text(*first)).to_string())
}

/// Body block of `describe('<title>', () => { ... })`.
fn describe_body<'t>(file: &ParsedFile, statement: Node<'t>, title: &str) -> Option<Node<'t>> {
    let (callee, args) = call_statement(file, statement)?;
    if callee != "describe" || string_argument(file, &args)? != title {
        return None;
    }
    let callback = args.get(1)?;
    let body = callback.child_by_field_name("body")?;
    (body.kind() == "statement_block").then_some(body)
}

fn is_generated_test(file: &ParsedFile, statement: Node<'_>, component: &str) -> bool {
    call_statement(file, statement)
        .filter(|(callee, _)| callee == "it" || callee == "test")
        .and_then(|(_, args)| string_argument(file, &args))
        .is_some_and(|title| is_generated_title(component, &title))
}

/// `const renderXComponent = ...`
fn is_render_helper(file: &ParsedFile, statement: Node<'_>) -> bool {
    if !matches!(statement.kind(), "lexical_declaration" | "variable_declaration") {
        return false;
    }
    let declarators: Vec<Node<'_>> = named_children(statement)
        .into_iter()
        .filter(|d| d.kind() == "variable_declarator")
        .collect();
    !declarators.is_empty()
        && declarators.iter().all(|d| {
            d.child_by_field_name("name").is_some_and(|n| {
                let name = file.text(n);
                name.len() > "renderComponent".len()
                    && name.starts_with("render")
                    && name.ends_with("Component")
            })
        })
}

fn import_source(file: &ParsedFile, statement: Node<'_>) -> Option<String> {
    statement
        .child_by_field_name("source")
        .map(|s| unquote(file.text(s)).to_string())
}

fn import_specifiers<'t>(statement: Node<'t>) -> Vec<Node<'t>> {
    named_children(statement)
        .into_iter()
        .filter(|c| c.kind() == "import_clause")
        .flat_map(named_children)
        .filter(|c| c.kind() == "named_imports")
        .flat_map(named_children)
        .filter(|c| c.kind() == "import_specifier")
        .collect()
}

/// The `Name` of `import Name, { ... } from '...'`.
fn default_binding<'t>(statement: Node<'t>) -> Option<Node<'t>> {
    named_children(statement)
        .into_iter()
        .filter(|c| c.kind() == "import_clause")
        .flat_map(named_children)
        .find(|c| c.kind() == "identifier")
}

fn local_name(file: &ParsedFile, specifier: Node<'_>) -> Option<String> {
    specifier
        .child_by_field_name("alias")
        .or_else(|| specifier.child_by_field_name("name"))
        .map(|n| file.text(n).to_string())
}

fn imported_modules(file: &ParsedFile) -> FxHashSet<String> {
    named_children(file.root())
        .into_iter()
        .filter(|s| s.kind() == "import_statement")
        .filter_map(|s| import_source(file, s))
        .collect()
}

fn imported_names(file: &ParsedFile) -> FxHashSet<String> {
    let statements: Vec<Node<'_>> = named_children(file.root())
        .into_iter()
        .filter(|s| s.kind() == "import_statement")
        .collect();
    let defaults = statements
        .iter()
        .filter_map(|s| default_binding(*s))
        .map(|n| file.text(n).to_string());
    statements
        .iter()
        .flat_map(|s| import_specifiers(*s))
        .filter_map(|s| local_name(file, s))
        .chain(defaults)
        .collect()
}

/// The part of a prior import the new text does not already cover.
fn preserved_import(
    file: &ParsedFile,
    statement: Node<'_>,
    imported: &FxHashSet<String>,
    modules: &FxHashSet<String>,
) -> Option<String> {
    let source = import_source(file, statement)?;
    if !modules.contains(&source) {
        return Some(file.text(statement).trim_end_matches(';').to_string());
    }
    let default = default_binding(statement)
        .map(|n| file.text(n))
        .filter(|n| !imported.contains(*n));
    let extra: Vec<&str> = import_specifiers(statement)
        .into_iter()
        .filter(|s| local_name(file, *s).is_some_and(|n| !imported.contains(&n)))
        .map(|s| file.text(s))
        .collect();
    match (default, extra.is_empty()) {
        (None, true) => None,
        (Some(default), true) => Some(format!("import {default} from '{source}'")),
        (Some(default), false) => Some(format!(
            "import {default}, {{ {} }} from '{source}'",
            extra.join(", ")
        )),
        (None, false) => Some(format!("import {{ {} }} from '{}'", extra.join(", "), source)),
    }
}
