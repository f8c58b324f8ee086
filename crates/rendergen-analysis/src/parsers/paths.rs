//! Lexical path helpers. No filesystem access beyond `is_file` checks.

use std::path::{Component, Path, PathBuf};

/// Normalize `path` lexically: drop `.` segments and fold `..` into its parent.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    _ => false,
                };
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `path` made absolute against the working directory, then normalized.
///
/// Purely lexical; when the working directory is unavailable the path is
/// only normalized.
pub fn absolute(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(absolute) => normalize(&absolute),
        Err(_) => normalize(path),
    }
}

/// Whether an import specifier points at a file rather than a package.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier == "." || specifier == ".."
}

/// Resolve a relative import `specifier` from `dir` to an existing file.
///
/// Tries the specifier as written, then with each of `extensions`, then as a
/// directory holding `index.<ext>`.
pub fn resolve_module(dir: &Path, specifier: &str, extensions: &[String]) -> Option<PathBuf> {
    if !is_relative_specifier(specifier) {
        return None;
    }
    let base = normalize(&dir.join(specifier));
    if base.is_file() {
        return Some(base);
    }
    for ext in extensions {
        let mut candidate = base.clone().into_os_string();
        candidate.push(".");
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    for ext in extensions {
        let candidate = base.join(format!("index.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Render `path` as a module specifier relative to `from_dir`, without extension.
///
/// `index` files collapse to their directory. The result always starts with
/// `./` or `../` and uses forward slashes.
pub fn module_specifier(from_dir: &Path, path: &Path) -> String {
    let mut target = path.to_path_buf();
    target.set_extension("");
    // `types.d.ts` leaves `types.d` after one strip.
    if target.extension().is_some_and(|e| e == "d") {
        target.set_extension("");
    }
    if target.file_name().is_some_and(|n| n == "index") {
        target.pop();
    }
    let relative = pathdiff::diff_paths(&target, from_dir).unwrap_or(target);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        ".".to_string()
    } else if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}
