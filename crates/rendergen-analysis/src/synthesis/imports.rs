//! Import lines grouped by module, in first-use order.

use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ImportGroup {
    specifier: String,
    default: Option<String>,
    values: SmallVec<[String; 4]>,
    types: SmallVec<[String; 4]>,
}

/// Deduplicated imports, one line per module: the default binding first,
/// then named values, then types.
#[derive(Debug, Clone, Default)]
pub struct ImportPlan {
    groups: Vec<ImportGroup>,
}

impl ImportPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a value binding (component, function) from `specifier`.
    pub fn add_value(&mut self, specifier: &str, name: &str) {
        let group = self.group(specifier);
        if !group.values.iter().any(|n| n == name) {
            group.values.push(name.to_string());
        }
    }

    /// Import the default export of `specifier` under `name`.
    ///
    /// A module has one default export; a second call with another name is
    /// ignored.
    pub fn add_default(&mut self, specifier: &str, name: &str) {
        let group = self.group(specifier);
        if group.default.is_none() {
            group.default = Some(name.to_string());
        }
    }

    /// Import a type from `specifier`. Listed after the module's values.
    pub fn add_type(&mut self, specifier: &str, name: &str) {
        let group = self.group(specifier);
        if !group.types.iter().any(|n| n == name)
            && !group.values.iter().any(|n| n == name)
            && group.default.as_deref() != Some(name)
        {
            group.types.push(name.to_string());
        }
    }

    pub fn specifiers(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.specifier.as_str())
    }

    pub fn lines(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|g| {
                let names: Vec<&str> = g
                    .values
                    .iter()
                    .chain(g.types.iter())
                    .map(String::as_str)
                    .collect();
                let clause = match (&g.default, names.is_empty()) {
                    (Some(default), true) => default.clone(),
                    (Some(default), false) => format!("{default}, {{ {} }}", names.join(", ")),
                    (None, _) => format!("{{ {} }}", names.join(", ")),
                };
                format!("import {clause} from '{}'", g.specifier)
            })
            .collect()
    }

    fn group(&mut self, specifier: &str) -> &mut ImportGroup {
        let position = match self.groups.iter().position(|g| g.specifier == specifier) {
            Some(position) => position,
            None => {
                self.groups.push(ImportGroup {
                    specifier: specifier.to_string(),
                    ..Default::default()
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[position]
    }
}
