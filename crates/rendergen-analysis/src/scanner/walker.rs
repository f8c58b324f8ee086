//! Component discovery over a `<category>/<Component>/index.tsx` tree.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Entry file expected inside every component directory.
pub const ENTRY_FILE: &str = "index.tsx";

/// One component the pipeline should process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTarget {
    /// Path to the component's entry file.
    pub path: PathBuf,
    /// Expected exported component name (the directory name).
    pub name: String,
}

/// Discover component entry files under `components_dir`.
///
/// Layout is two levels deep: category directories, then one directory per
/// component holding an `index.tsx`. Hidden entries at either level are
/// skipped. Results are sorted by path.
pub fn discover_components(components_dir: &Path) -> Vec<ComponentTarget> {
    let walker = WalkBuilder::new(components_dir)
        .max_depth(Some(3))
        .hidden(true)
        .follow_links(false)
        .build();

    let mut targets = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry during discovery");
                continue;
            }
        };
        if entry.depth() != 3 || entry.file_name() != ENTRY_FILE {
            continue;
        }
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(name) = entry
            .path()
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|n| n.to_str())
        else {
            continue;
        };
        targets.push(ComponentTarget {
            path: entry.path().to_path_buf(),
            name: name.to_string(),
        });
    }

    targets.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(count = targets.len(), dir = %components_dir.display(), "discovered components");
    targets
}
