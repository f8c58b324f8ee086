//! TypeResolver: locate a structured type locally or across imports.
//!
//! Search order per file: local declarations, then import bindings, then
//! re-exports. Every hop into another file costs one unit of depth; past
//! `max_depth` the resolver gives up with `ImportCycleDetected`.

use std::path::{Path, PathBuf};

use rendergen_core::config::ResolutionConfig;
use rendergen_core::errors::ResolveError;

use super::types::{ResolvedType, StructuredType, TypeLocation};
use crate::components::{ExportBinding, FileIndex, DEFAULT_EXPORT};
use crate::parsers::paths::resolve_module;
use crate::parsers::{ParseCache, ParsedFile};

pub struct TypeResolver<'c> {
    cache: &'c ParseCache,
    max_depth: u32,
    extensions: Vec<String>,
}

/// A declaration found somewhere along the import chain.
struct Located {
    declaration: StructuredType,
    defining_file: PathBuf,
}

impl<'c> TypeResolver<'c> {
    pub fn new(cache: &'c ParseCache, config: &ResolutionConfig) -> Self {
        Self {
            cache,
            max_depth: config.effective_max_import_depth(),
            extensions: config.effective_extensions(),
        }
    }

    /// Resolve `type_name` as seen from `file`.
    pub fn resolve(
        &self,
        file: &ParsedFile,
        index: &FileIndex,
        type_name: &str,
    ) -> Result<ResolvedType, ResolveError> {
        if let Some(local) = index.find_type(type_name) {
            let located = self.complete(file, index, local.clone(), 0)?;
            let binding = index.export_binding(type_name);
            let name = match &binding {
                Some(ExportBinding::Named(exported)) => exported.clone(),
                _ => type_name.to_string(),
            };
            return Ok(ResolvedType {
                name,
                default_import: binding == Some(ExportBinding::Default),
                exported: located.declaration.exported,
                location: TypeLocation::Local,
                defining_file: located.defining_file,
                declaration: located.declaration,
            });
        }

        if let Some(binding) = index.find_import(type_name) {
            let module_path = self.module_path(file, &binding.specifier, type_name)?;
            let imported = self.cache.get_or_parse(&module_path)?;
            let imported_index = FileIndex::build(&imported, None);
            let located = self.locate(&imported, &imported_index, &binding.imported, 1)?;
            tracing::debug!(
                type_name,
                specifier = %binding.specifier,
                defining_file = %located.defining_file.display(),
                "resolved imported type"
            );
            let default_import = binding.imported == DEFAULT_EXPORT;
            let name = if default_import {
                type_name.to_string()
            } else {
                binding.imported.clone()
            };
            return Ok(ResolvedType {
                name,
                default_import,
                exported: true,
                location: TypeLocation::Imported {
                    specifier: binding.specifier.clone(),
                    module_path,
                },
                defining_file: located.defining_file,
                declaration: located.declaration,
            });
        }

        Err(not_found(type_name, &file.path))
    }

    /// Find `name` in `file` or anything it imports, at the given depth.
    fn locate(
        &self,
        file: &ParsedFile,
        index: &FileIndex,
        name: &str,
        depth: u32,
    ) -> Result<Located, ResolveError> {
        if depth > self.max_depth {
            return Err(ResolveError::ImportCycleDetected {
                type_name: name.to_string(),
                depth,
                path: file.path.clone(),
            });
        }

        let name = index.local_for_export(name);
        if let Some(local) = index.find_type(name) {
            return self.complete(file, index, local.clone(), depth);
        }

        if let Some(binding) = index.find_import(name) {
            return self.follow(file, &binding.specifier, &binding.imported, depth);
        }

        for reexport in &index.reexports {
            match (&reexport.exported, &reexport.imported) {
                (Some(exported), Some(imported)) if exported == name => {
                    return self.follow(file, &reexport.specifier, imported, depth);
                }
                // `export *` never forwards a default export
                (None, _) if name != DEFAULT_EXPORT => {
                    match self.follow(file, &reexport.specifier, name, depth) {
                        Ok(located) => return Ok(located),
                        Err(ResolveError::TypeNotFound { .. }) => continue,
                        Err(e) => return Err(e),
                    }
                }
                _ => {}
            }
        }

        Err(not_found(name, &file.path))
    }

    /// Parse the module `specifier` points at and look for `name` there.
    fn follow(
        &self,
        file: &ParsedFile,
        specifier: &str,
        name: &str,
        depth: u32,
    ) -> Result<Located, ResolveError> {
        let path = self.module_path(file, specifier, name)?;
        let next = self.cache.get_or_parse(&path)?;
        let next_index = FileIndex::build(&next, None);
        self.locate(&next, &next_index, name, depth + 1)
    }

    fn module_path(
        &self,
        file: &ParsedFile,
        specifier: &str,
        type_name: &str,
    ) -> Result<PathBuf, ResolveError> {
        resolve_module(file.dir(), specifier, &self.extensions).ok_or_else(|| {
            tracing::debug!(type_name, specifier, "import path did not resolve");
            not_found(type_name, &file.path)
        })
    }

    /// Fold inherited members of `declaration` from its `extends` bases.
    fn complete(
        &self,
        file: &ParsedFile,
        index: &FileIndex,
        mut declaration: StructuredType,
        depth: u32,
    ) -> Result<Located, ResolveError> {
        let bases = std::mem::take(&mut declaration.extends);
        for base in bases.iter().rev() {
            let inherited = self.locate(file, index, base, depth + 1)?;
            declaration.inherit(&inherited.declaration.members);
        }
        declaration.extends = bases;
        Ok(Located {
            declaration,
            defining_file: file.path.clone(),
        })
    }
}

fn not_found(type_name: &str, path: &Path) -> ResolveError {
    ResolveError::TypeNotFound {
        type_name: type_name.to_string(),
        path: path.to_path_buf(),
    }
}

