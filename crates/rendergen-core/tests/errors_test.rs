//! Tests for the rendergen error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use rendergen_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let parse = ParseError::UnsupportedLanguage {
        extension: "vue".into(),
    };
    assert_eq!(parse.error_code(), "UNSUPPORTED_LANGUAGE");

    let resolve = ResolveError::TypeNotFound {
        type_name: "ExampleProps".into(),
        path: PathBuf::from("src/Example/index.tsx"),
    };
    assert_eq!(resolve.error_code(), "TYPE_NOT_FOUND");

    let cycle = ResolveError::ImportCycleDetected {
        type_name: "Loop".into(),
        depth: 8,
        path: PathBuf::from("a.ts"),
    };
    assert_eq!(cycle.error_code(), "IMPORT_CYCLE_DETECTED");

    let synthesis = SynthesisError::ComponentNotFound {
        name: "Example".into(),
        path: PathBuf::from("index.tsx"),
    };
    assert_eq!(synthesis.error_code(), "COMPONENT_NOT_FOUND");

    let format = FormatError::InvalidSyntax { errors: 1, line: 3 };
    assert_eq!(format.error_code(), "FORMATTER_FAILURE");

    let merge = MergeError::UnparseableExisting {
        path: PathBuf::from("x.test.tsx"),
        errors: 2,
    };
    assert_eq!(merge.error_code(), "MERGE_ERROR");

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_from_conversions() {
    let resolve = ResolveError::TypeNotFound {
        type_name: "Props".into(),
        path: PathBuf::from("index.tsx"),
    };
    let generation: GenerationError = resolve.into();
    assert!(matches!(
        generation,
        GenerationError::Resolve(ResolveError::TypeNotFound { .. })
    ));
    // Aggregate keeps the inner code
    assert_eq!(generation.error_code(), "TYPE_NOT_FOUND");

    let parse = ParseError::UnsupportedLanguage {
        extension: "rb".into(),
    };
    let resolve: ResolveError = parse.into();
    assert_eq!(resolve.error_code(), "UNSUPPORTED_LANGUAGE");

    let write = GenerationError::WriteFailed {
        path: PathBuf::from("out.test.tsx"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(write.error_code(), "IO_FAILURE");
}

#[test]
fn test_tagged_string_format() {
    let err = ResolveError::TypeNotFound {
        type_name: "CoolExternalType".into(),
        path: PathBuf::from("index.tsx"),
    };
    let tagged = err.tagged_string();
    assert!(tagged.starts_with("[TYPE_NOT_FOUND] "));
    assert!(tagged.contains("CoolExternalType"));
}

#[test]
fn test_error_codes_are_distinct_per_taxonomy_entry() {
    let codes: HashSet<&str> = [
        ResolveError::TypeNotFound {
            type_name: "A".into(),
            path: PathBuf::new(),
        }
        .error_code(),
        ResolveError::ImportCycleDetected {
            type_name: "A".into(),
            depth: 1,
            path: PathBuf::new(),
        }
        .error_code(),
        FormatError::InvalidSyntax { errors: 1, line: 1 }.error_code(),
        GenerationError::WriteFailed {
            path: PathBuf::new(),
            source: std::io::Error::other("x"),
        }
        .error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn test_generation_report_collects_errors() {
    let mut report: GenerationReport<Vec<PathBuf>> = GenerationReport::new(Vec::new());
    assert!(report.is_clean());

    report.data.push(PathBuf::from("__tests__/Example.test.tsx"));
    report.add_error(
        "Broken",
        SynthesisError::ComponentNotFound {
            name: "Broken".into(),
            path: PathBuf::from("Broken/index.tsx"),
        }
        .into(),
    );

    assert!(!report.is_clean());
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors[0].0, "Broken");
    assert_eq!(report.data.len(), 1);
}
