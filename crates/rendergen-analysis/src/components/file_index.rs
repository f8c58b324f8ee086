//! FileIndex: everything one walk over a file's top level learns.
//!
//! Built fresh per file and passed by reference through recognition and
//! resolution; never shared across component runs.

use rustc_hash::FxHashSet;
use tree_sitter::Node;

use super::recognizer::{recognize, ComponentDescriptor, ExportBinding};
use crate::parsers::syntax::{has_token, named_children, unquote};
use crate::parsers::ParsedFile;
use crate::resolution::declarations::structured_type;
use crate::resolution::StructuredType;

/// Export name under which a module's default export is imported.
pub const DEFAULT_EXPORT: &str = "default";

/// One name bound by an `import { a as b } from '...'` or default import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Name visible inside this file.
    pub local: String,
    /// Name exported by the source module (`default` for default imports).
    pub imported: String,
    pub specifier: String,
}

/// An `export { a as b } from '...'` entry, or `export * from '...'` when `exported` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExport {
    pub exported: Option<String>,
    pub imported: Option<String>,
    pub specifier: String,
}

#[derive(Debug, Default)]
pub struct FileIndex {
    pub components: Vec<ComponentDescriptor>,
    /// Local names made visible to importers.
    pub exported_names: FxHashSet<String>,
    pub types: Vec<StructuredType>,
    pub imports: Vec<ImportBinding>,
    pub reexports: Vec<ReExport>,
    /// Local name behind `export default`, if the file has one.
    pub default_export: Option<String>,
    /// Every `(local name, binding)` pair the file exports.
    pub export_bindings: Vec<(String, ExportBinding)>,
}

impl FileIndex {
    /// Index `file`. `target` names the component under synthesis, if any.
    pub fn build(file: &ParsedFile, target: Option<&str>) -> Self {
        let mut index = FileIndex::default();
        let mut declared_exported: FxHashSet<String> = FxHashSet::default();

        for statement in named_children(file.root()) {
            match statement.kind() {
                "import_statement" => index.collect_import(file, statement),
                "export_statement" => {
                    index.collect_export(file, statement, &mut declared_exported);
                }
                _ => index.collect_declaration(file, statement, false),
            }
        }

        index.exported_names.extend(declared_exported);
        for component in &mut index.components {
            component.binding = binding_for(&index.export_bindings, &component.name);
            component.exported = component.binding.is_some();
            component.is_main_target = target == Some(component.public_name());
        }
        for ty in &mut index.types {
            ty.exported = ty.exported || index.exported_names.contains(&ty.name);
        }

        tracing::debug!(
            path = %file.path.display(),
            components = index.components.len(),
            types = index.types.len(),
            imports = index.imports.len(),
            "indexed file"
        );
        index
    }

    pub fn find_type(&self, name: &str) -> Option<&StructuredType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn find_import(&self, local: &str) -> Option<&ImportBinding> {
        self.imports.iter().find(|b| b.local == local)
    }

    /// How importers reach the local binding `local`, if it is exported at all.
    pub fn export_binding(&self, local: &str) -> Option<ExportBinding> {
        binding_for(&self.export_bindings, local)
    }

    /// Local name for an export name; `default` maps to the default-exported binding.
    pub fn local_for_export<'a>(&'a self, exported: &'a str) -> &'a str {
        match self.default_export.as_deref() {
            Some(local) if exported == DEFAULT_EXPORT => local,
            _ => exported,
        }
    }

    /// Look a component up by the name importers use for it.
    pub fn find_component(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.public_name() == name)
    }

    /// Components eligible as children: exported and not the target.
    pub fn child_candidates(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components
            .iter()
            .filter(|c| c.exported && !c.is_main_target)
    }

    fn collect_declaration(&mut self, file: &ParsedFile, node: Node<'_>, exported: bool) {
        match node.kind() {
            "interface_declaration" | "type_alias_declaration" => {
                if let Some(ty) = structured_type(file, node, exported) {
                    self.types.push(ty);
                }
            }
            "function_declaration" => {
                if let Some(component) = recognize(file, node) {
                    self.components.push(component);
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in named_children(node)
                    .into_iter()
                    .filter(|c| c.kind() == "variable_declarator")
                {
                    if let Some(component) = recognize(file, declarator) {
                        self.components.push(component);
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_import(&mut self, file: &ParsedFile, node: Node<'_>) {
        let Some(source) = node.child_by_field_name("source") else {
            return;
        };
        let specifier = unquote(file.text(source)).to_string();
        let Some(clause) = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "import_clause")
        else {
            return;
        };

        for part in named_children(clause) {
            match part.kind() {
                "identifier" => self.imports.push(ImportBinding {
                    local: file.text(part).to_string(),
                    imported: DEFAULT_EXPORT.to_string(),
                    specifier: specifier.clone(),
                }),
                "named_imports" => {
                    for item in named_children(part)
                        .into_iter()
                        .filter(|s| s.kind() == "import_specifier")
                    {
                        let Some(name) = item.child_by_field_name("name") else {
                            continue;
                        };
                        let imported = file.text(name).to_string();
                        let local = item
                            .child_by_field_name("alias")
                            .map(|a| file.text(a).to_string())
                            .unwrap_or_else(|| imported.clone());
                        self.imports.push(ImportBinding {
                            local,
                            imported,
                            specifier: specifier.clone(),
                        });
                    }
                }
                // namespace imports carry no bindable type names
                _ => {}
            }
        }
    }

    fn collect_export(
        &mut self,
        file: &ParsedFile,
        node: Node<'_>,
        exported: &mut FxHashSet<String>,
    ) {
        let source = node
            .child_by_field_name("source")
            .map(|s| unquote(file.text(s)).to_string());
        let is_default = has_token(node, "default");

        if let Some(declaration) = node.child_by_field_name("declaration") {
            for name in declared_names(file, declaration) {
                let binding = if is_default {
                    ExportBinding::Default
                } else {
                    ExportBinding::Named(name.clone())
                };
                self.bind_export(name, binding, exported);
            }
            self.collect_declaration(file, declaration, true);
            return;
        }

        if let Some(value) = node.child_by_field_name("value") {
            match value.kind() {
                // export default Name
                "identifier" => {
                    let name = file.text(value).to_string();
                    self.bind_export(name, ExportBinding::Default, exported);
                }
                // export default function Name(...) parsed as an expression
                "function_expression" | "function" => {
                    if let Some(component) = recognize(file, value) {
                        self.bind_export(component.name.clone(), ExportBinding::Default, exported);
                        self.components.push(component);
                    }
                }
                _ => {}
            }
            return;
        }

        let clause = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "export_clause");

        match (clause, source) {
            (Some(clause), Some(specifier)) => {
                for item in export_specifiers(clause) {
                    let Some(name) = item.child_by_field_name("name") else {
                        continue;
                    };
                    let imported = file.text(name).to_string();
                    let exported_as = item
                        .child_by_field_name("alias")
                        .map(|a| file.text(a).to_string())
                        .unwrap_or_else(|| imported.clone());
                    self.reexports.push(ReExport {
                        exported: Some(exported_as),
                        imported: Some(imported),
                        specifier: specifier.clone(),
                    });
                }
            }
            (Some(clause), None) => {
                for item in export_specifiers(clause) {
                    let Some(name) = item.child_by_field_name("name") else {
                        continue;
                    };
                    let local = file.text(name).to_string();
                    let binding = match item.child_by_field_name("alias").map(|a| file.text(a)) {
                        Some(DEFAULT_EXPORT) => ExportBinding::Default,
                        Some(alias) => ExportBinding::Named(alias.to_string()),
                        None => ExportBinding::Named(local.clone()),
                    };
                    self.bind_export(local, binding, exported);
                }
            }
            (None, Some(specifier)) => self.reexports.push(ReExport {
                exported: None,
                imported: None,
                specifier,
            }),
            (None, None) => {}
        }
    }

    fn bind_export(
        &mut self,
        local: String,
        binding: ExportBinding,
        exported: &mut FxHashSet<String>,
    ) {
        if binding == ExportBinding::Default {
            self.default_export = Some(local.clone());
        }
        exported.insert(local.clone());
        self.export_bindings.push((local, binding));
    }
}

/// The binding importers should use for `local`: its own name if exported
/// under it, else an alias, else the default export.
fn binding_for(bindings: &[(String, ExportBinding)], local: &str) -> Option<ExportBinding> {
    let own = bindings.iter().filter(|(l, _)| l == local);
    own.clone()
        .find(|(_, b)| matches!(b, ExportBinding::Named(name) if name == local))
        .or_else(|| own.clone().find(|(_, b)| matches!(b, ExportBinding::Named(_))))
        .or_else(|| own.clone().next())
        .map(|(_, b)| b.clone())
}

fn export_specifiers(clause: Node<'_>) -> Vec<Node<'_>> {
    named_children(clause)
        .into_iter()
        .filter(|s| s.kind() == "export_specifier")
        .collect()
}

/// Names introduced by a declaration under `export`.
fn declared_names(file: &ParsedFile, declaration: Node<'_>) -> Vec<String> {
    match declaration.kind() {
        "lexical_declaration" | "variable_declaration" => named_children(declaration)
            .into_iter()
            .filter(|c| c.kind() == "variable_declarator")
            .filter_map(|d| d.child_by_field_name("name"))
            .filter(|n| n.kind() == "identifier")
            .map(|n| file.text(n).to_string())
            .collect(),
        _ => declaration
            .child_by_field_name("name")
            .map(|n| vec![file.text(n).to_string()])
            .unwrap_or_default(),
    }
}
