//! Shared helpers for rendergen-analysis integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rendergen_analysis::parsers::paths::normalize;
use rendergen_analysis::parsers::{ParsedFile, ParserManager};
use rendergen_core::RendergenConfig;
use tempfile::TempDir;

/// `test-fixtures/` at the repository root.
pub fn fixtures_root() -> PathBuf {
    normalize(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures"))
}

pub fn fixture(relative: &str) -> PathBuf {
    fixtures_root().join(relative)
}

/// Parse in-memory TSX as if it lived at `/virtual/<name>`.
pub fn parse_tsx(source: &str) -> ParsedFile {
    ParserManager::new()
        .parse(source.to_string(), Path::new("/virtual/Component/index.tsx"))
        .expect("parse tsx")
}

/// Write `files` (relative path, contents) under a fresh temp dir.
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (relative, contents) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(&path, contents).expect("write file");
    }
    dir
}

/// Copy `test-fixtures/components` into a temp project at `<tmp>/components`.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    copy_dir(&fixture("components"), &dir.path().join("components"));
    dir
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("create dir");
    for entry in fs::read_dir(from).expect("read dir") {
        let entry = entry.expect("dir entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("copy file");
        }
    }
}

/// Defaults with a pinned seed so generated literals are stable.
pub fn seeded_config() -> RendergenConfig {
    let mut config = RendergenConfig::default();
    config.sampling.seed = Some(42);
    config
}
