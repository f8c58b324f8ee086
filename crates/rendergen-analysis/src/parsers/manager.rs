//! ParserManager: one tree-sitter parser per grammar per thread.

use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

use rendergen_core::errors::ParseError;
use rustc_hash::FxHashMap;
use tree_sitter::Parser;

use super::error_tolerant::count_errors;
use super::types::ParsedFile;
use crate::scanner::language_detect::Language;

thread_local! {
    static PARSERS: RefCell<FxHashMap<Language, Parser>> = RefCell::new(FxHashMap::default());
}

/// Stateless front door to the thread-local parsers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParserManager;

impl ParserManager {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the file at `path`, picking the grammar from its extension.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile, ParseError> {
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(source, path)
    }

    /// Parse `source`, picking the grammar from `path`'s extension.
    pub fn parse(&self, source: String, path: &Path) -> Result<ParsedFile, ParseError> {
        let ext = path.extension().and_then(|e| e.to_str());
        let language =
            Language::from_extension(ext).ok_or_else(|| ParseError::UnsupportedLanguage {
                extension: ext.unwrap_or("").to_string(),
            })?;
        self.parse_as(source, path, language)
    }

    /// Parse `source` with an explicit grammar.
    pub fn parse_as(
        &self,
        source: String,
        path: &Path,
        language: Language,
    ) -> Result<ParsedFile, ParseError> {
        let start = Instant::now();
        let tree = PARSERS.with(|cell| {
            let mut parsers = cell.borrow_mut();
            if !parsers.contains_key(&language) {
                let mut parser = Parser::new();
                parser
                    .set_language(&language.ts_language())
                    .map_err(|e| ParseError::TreeSitter {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                parsers.insert(language, parser);
            }
            let parser = parsers
                .get_mut(&language)
                .ok_or_else(|| ParseError::TreeSitter {
                    path: path.to_path_buf(),
                    message: "parser unavailable".to_string(),
                })?;
            parser
                .parse(source.as_bytes(), None)
                .ok_or_else(|| ParseError::TreeSitter {
                    path: path.to_path_buf(),
                    message: "parser returned no tree".to_string(),
                })
        })?;

        let (error_count, _) = count_errors(tree.root_node());
        let parse_time_us = start.elapsed().as_micros() as u64;
        tracing::trace!(path = %path.display(), parse_time_us, error_count, "parsed");

        Ok(ParsedFile {
            path: path.to_path_buf(),
            language,
            source,
            tree,
            parse_time_us,
            error_count,
        })
    }
}
