//! Parser layer tests: language detection, parsing, cache, paths, discovery.

mod common;

use std::path::{Path, PathBuf};

use rendergen_analysis::parsers::paths::{module_specifier, normalize, resolve_module};
use rendergen_analysis::parsers::{NodeSpan, ParseCache, ParserManager};
use rendergen_analysis::scanner::{discover_components, Language};
use rendergen_core::errors::ParseError;

use common::{fixture, fixtures_root, parse_tsx, temp_tree};

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "d.ts", "js", "jsx"]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

#[test]
fn test_language_from_extension() {
    assert_eq!(Language::from_extension(Some("tsx")), Some(Language::Tsx));
    assert_eq!(Language::from_extension(Some("ts")), Some(Language::TypeScript));
    assert_eq!(Language::from_extension(Some("jsx")), Some(Language::Jsx));
    assert_eq!(Language::from_extension(Some("py")), None);
    assert_eq!(Language::from_extension(None), None);
}

#[test]
fn test_parse_tsx_clean() {
    let parsed = parse_tsx("const A = ({ x }: P) => <View>{x}</View>;\n");
    assert!(!parsed.has_errors());
    assert_eq!(parsed.root().kind(), "program");
}

#[test]
fn test_parse_counts_errors() {
    let parsed = parse_tsx("const A = ({ x }: P) => <View>{x</View>;\n");
    assert!(parsed.has_errors());
    assert!(parsed.error_count > 0);
}

#[test]
fn test_unsupported_extension() {
    let err = ParserManager::new()
        .parse("x = 1".to_string(), Path::new("script.py"))
        .unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedLanguage { ref extension } if extension == "py"));
}

#[test]
fn test_missing_file_is_read_failure() {
    let err = ParserManager::new()
        .parse_file(Path::new("/definitely/not/here/index.tsx"))
        .unwrap_err();
    assert!(matches!(err, ParseError::ReadFailed { .. }));
}

#[test]
fn test_node_span_round_trips_to_node() {
    let parsed = parse_tsx("const A = 1;\nfunction B() {}\n");
    let function = parsed.root().named_child(1).unwrap();
    let span = NodeSpan::of(function);
    let found = parsed.node_at(&span).unwrap();
    assert_eq!(found.kind(), "function_declaration");
    assert_eq!(found.start_byte(), function.start_byte());
}

#[test]
fn test_parse_cache_hits() {
    let cache = ParseCache::new();
    let path = fixture("components/layout/Example/index.tsx");
    let first = cache.get_or_parse(&path).unwrap();
    let second = cache.get_or_parse(&path).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    assert!((cache.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_parse_cache_invalidate() {
    let cache = ParseCache::new();
    let path = fixture("components/layout/Example/types.ts");
    cache.get_or_parse(&path).unwrap();
    cache.invalidate(&path);
    cache.get_or_parse(&path).unwrap();
    assert_eq!(cache.misses(), 2);
}

#[test]
fn test_normalize_folds_parent_segments() {
    assert_eq!(
        normalize(Path::new("/a/b/../c/./d")),
        PathBuf::from("/a/c/d")
    );
    assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
}

#[test]
fn test_resolve_module_extension_and_index() {
    let dir = temp_tree(&[
        ("src/types.ts", "export interface A { a: string }"),
        ("src/shared/index.ts", "export * from './b'"),
        ("src/legacy.d.ts", "export interface L { l: string }"),
    ]);
    let src = dir.path().join("src");
    let ext = default_extensions();

    assert_eq!(
        resolve_module(&src, "./types", &ext),
        Some(src.join("types.ts"))
    );
    assert_eq!(
        resolve_module(&src, "./shared", &ext),
        Some(src.join("shared/index.ts"))
    );
    assert_eq!(
        resolve_module(&src, "./legacy", &ext),
        Some(src.join("legacy.d.ts"))
    );
    assert_eq!(resolve_module(&src, "./missing", &ext), None);
    assert_eq!(resolve_module(&src, "react-native", &ext), None);
}

#[test]
fn test_module_specifier_relative_forms() {
    let tests_dir = Path::new("/p/components/layout/Example/__tests__");
    assert_eq!(
        module_specifier(tests_dir, Path::new("/p/components/layout/Example/index.tsx")),
        ".."
    );
    assert_eq!(
        module_specifier(tests_dir, Path::new("/p/components/layout/Example/types.ts")),
        "../types"
    );
    assert_eq!(
        module_specifier(tests_dir, Path::new("/p/components/layout/Example/__tests__/util.ts")),
        "./util"
    );
    assert_eq!(
        module_specifier(tests_dir, Path::new("/p/src/utils/jest/helpers")),
        "../../../../src/utils/jest/helpers"
    );
}

#[test]
fn test_discover_components_layout() {
    let targets = discover_components(&fixtures_root().join("components"));
    let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Button", "Broken", "Example"]);
    assert!(targets
        .iter()
        .all(|t| t.path.file_name().unwrap() == "index.tsx"));
}

#[test]
fn test_discover_skips_hidden_and_shallow() {
    let dir = temp_tree(&[
        ("cat/Visible/index.tsx", ""),
        ("cat/.Hidden/index.tsx", ""),
        (".cat/Inner/index.tsx", ""),
        ("cat/index.tsx", ""),
        ("cat/Deep/nested/index.tsx", ""),
    ]);
    let targets = discover_components(dir.path());
    let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Visible"]);
}
