//! Parse cache: parse each file once per run, share the tree read-only.
//!
//! Uses `moka::sync::Cache`, safe for concurrent readers when a directory
//! run fans out across components. Tracks hits/misses.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use rendergen_core::errors::ParseError;

use super::manager::ParserManager;
use super::paths::normalize;
use super::types::ParsedFile;

/// Maximum cached files.
const MAX_ENTRIES: u64 = 4_096;

/// Memoizes parsed files keyed by normalized path.
pub struct ParseCache {
    cache: Cache<PathBuf, Arc<ParsedFile>>,
    manager: ParserManager,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(MAX_ENTRIES).build(),
            manager: ParserManager::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the parsed file at `path`, parsing it on first request.
    pub fn get_or_parse(&self, path: &Path) -> Result<Arc<ParsedFile>, ParseError> {
        let key = normalize(path);
        if let Some(parsed) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(parsed);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let parsed = Arc::new(self.manager.parse_file(&key)?);
        self.cache.insert(key, Arc::clone(&parsed));
        Ok(parsed)
    }

    /// Drop the cached entry for `path`, e.g. after the file was rewritten.
    pub fn invalidate(&self, path: &Path) {
        self.cache.invalidate(&normalize(path));
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Fraction of lookups served from the cache.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }
}
