//! TestSynthesizer: bundle in, jest test source text out.
//!
//! The text is indented with tabs; the formatter expands them to the
//! configured width before anything is written.

use std::path::{Path, PathBuf};

use rendergen_core::config::SynthesisConfig;
use rendergen_core::errors::SynthesisError;

use super::bundle::{AnalyzedComponent, ComponentBundle};
use super::imports::ImportPlan;
use super::naming::{
    child_test_title, describe_title, event_name, field_test_id, field_test_title,
    render_helper, test_id,
};
use crate::parsers::paths::{absolute, module_specifier};
use crate::props::{FieldDescriptor, TypeCategory};
use crate::resolution::TypeLocation;
use crate::usage::UsageContext;

/// Where the generated file will live, for computing relative imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub component_file: PathBuf,
    pub tests_dir: PathBuf,
    pub project_root: PathBuf,
}

impl OutputLocation {
    /// Both paths are made absolute, so a relative root and an absolute
    /// component file still yield relative specifiers.
    pub fn new(component_file: &Path, project_root: &Path, tests_dir_name: &str) -> Self {
        let component_file = absolute(component_file);
        let tests_dir = component_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(tests_dir_name);
        Self {
            component_file,
            tests_dir,
            project_root: absolute(project_root),
        }
    }

    /// Specifier for the component file, as seen from the tests directory.
    pub fn local_specifier(&self) -> String {
        module_specifier(&self.tests_dir, &self.component_file)
    }
}

/// How a field test locates its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Text,
    TestId,
    Structural,
}

pub struct TestSynthesizer<'a> {
    config: &'a SynthesisConfig,
}

impl<'a> TestSynthesizer<'a> {
    pub fn new(config: &'a SynthesisConfig) -> Self {
        Self { config }
    }

    pub fn synthesize(
        &self,
        bundle: &ComponentBundle,
        target: &str,
        output: &OutputLocation,
    ) -> Result<String, SynthesisError> {
        if bundle.main.name() != target {
            return Err(SynthesisError::ComponentNotFound {
                name: target.to_string(),
                path: output.component_file.clone(),
            });
        }

        let imports = self.imports(bundle, output);
        let test_id_attribute = self.config.effective_test_id_attribute();
        let helpers: Vec<String> = bundle
            .components()
            .map(|c| render_helper_block(c, test_id_attribute))
            .collect();
        let describe = self.describe(bundle, target);

        let mut text = imports.lines().join("\n");
        text.push_str("\n\n");
        text.push_str(&helpers.join("\n\n"));
        text.push_str("\n\n");
        text.push_str(&describe);
        text.push('\n');

        tracing::debug!(
            component = target,
            field_tests = bundle.main.fields.len(),
            child_tests = bundle.children.len(),
            "synthesized test text"
        );
        Ok(text)
    }

    pub fn imports(&self, bundle: &ComponentBundle, output: &OutputLocation) -> ImportPlan {
        let mut plan = ImportPlan::new();
        plan.add_value(self.config.effective_render_module(), "render");
        if bundle.main.fields.iter().any(fires_event) {
            plan.add_value(self.config.effective_render_module(), "fireEvent");
        }
        let helpers = output
            .project_root
            .join(self.config.effective_helpers_module());
        plan.add_value(
            &module_specifier(&output.tests_dir, &helpers),
            self.config.effective_lookup_helper(),
        );

        let local = output.local_specifier();
        for component in bundle.components() {
            if component.descriptor.is_default_export() {
                plan.add_default(&local, component.name());
            } else {
                plan.add_value(&local, component.name());
            }
            let props_type = &component.props_type;
            if !props_type.exported {
                continue;
            }
            let specifier = match &props_type.location {
                TypeLocation::Local => local.clone(),
                TypeLocation::Imported { module_path, .. } => {
                    module_specifier(&output.tests_dir, module_path)
                }
            };
            if props_type.default_import {
                plan.add_default(&specifier, &props_type.name);
            } else {
                plan.add_type(&specifier, &props_type.name);
            }
        }
        plan
    }

    fn describe(&self, bundle: &ComponentBundle, target: &str) -> String {
        let helper = render_helper(target);
        let mut tests: Vec<String> = bundle
            .main
            .fields
            .iter()
            .map(|field| self.field_test(target, &helper, field))
            .collect();
        tests.extend(
            bundle
                .children
                .iter()
                .map(|child| child_smoke_test(target, child.name())),
        );

        let body = tests
            .iter()
            .map(|t| indent(t))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "describe('{}', () => {{\n{}\n}})",
            describe_title(target, self.config.effective_strip_affix()),
            body
        )
    }

    fn field_test(&self, component: &str, helper: &str, field: &FieldDescriptor) -> String {
        let context = field.usage.context;
        let lookup = if context == UsageContext::StyleOrClassName {
            Lookup::Structural
        } else if field.usage.has_test_identifier {
            Lookup::TestId
        } else if context == UsageContext::AsText && field.category == TypeCategory::String {
            Lookup::Text
        } else {
            Lookup::Structural
        };
        let value = if context == UsageContext::EventHandlerOrFunction {
            "jest.fn()"
        } else {
            field.sample.as_str()
        };
        let lookup_helper = self.config.effective_lookup_helper();

        let (query, element) = match lookup {
            Lookup::Text => ("getByText", "getByText(propValue)".to_string()),
            Lookup::TestId => (
                "getByTestId",
                format!("getByTestId('{}')", field_test_id(&field.name)),
            ),
            Lookup::Structural => (
                "container",
                format!("await {lookup_helper}(container, propName, propValue)"),
            ),
        };
        let assertion = match context {
            UsageContext::StyleOrClassName => {
                "expect(element.props.style).toMatchObject(propValue)".to_string()
            }
            UsageContext::EventHandlerOrFunction => match event_name(&field.name) {
                Some(event) => format!(
                    "fireEvent(element, '{event}')\n\texpect(propValue).toHaveBeenCalled()"
                ),
                // render callbacks run during render
                None => "expect(propValue).toHaveBeenCalled()".to_string(),
            },
            _ => "expect(element).toBeTruthy()".to_string(),
        };

        format!(
            "it('{title}', async () => {{\n\
             \tconst propName = '{name}'\n\
             \tconst propValue = {value}\n\
             \n\
             \tconst {{ {query} }} = {helper}({{ [propName]: propValue }})\n\
             \tconst element = {element}\n\
             \t{assertion}\n\
             }})",
            title = field_test_title(component, &field.name),
            name = field.name,
        )
    }
}

/// An `on<Event>` handler the generated test has to fire before asserting.
fn fires_event(field: &FieldDescriptor) -> bool {
    field.usage.context == UsageContext::EventHandlerOrFunction && event_name(&field.name).is_some()
}

fn child_smoke_test(component: &str, child: &str) -> String {
    format!(
        "it('{title}', () => {{\n\
         \tconst {{ getByTestId }} = {helper}({{}})\n\
         \tconst element = getByTestId('{id}')\n\
         \texpect(element).toBeTruthy()\n\
         }})",
        title = child_test_title(component, child),
        helper = render_helper(child),
        id = test_id(child),
    )
}

/// Render helper seeded with every required field plus the component's test id.
fn render_helper_block(component: &AnalyzedComponent, test_id_attribute: &str) -> String {
    let name = component.name();
    let mut defaults: Vec<String> = component
        .fields
        .required()
        .filter(|f| f.name != test_id_attribute)
        .map(|f| format!("\t\t{}: {},", f.name, f.sample))
        .collect();
    defaults.push(format!("\t\t{}: '{}',", test_id_attribute, test_id(name)));

    let annotation = if component.props_type.exported {
        format!(": {}", component.props_type.name)
    } else {
        String::new()
    };

    format!(
        "const {helper} = (values: any) => {{\n\
         \tconst defaultProps = {{\n\
         {defaults}\n\
         \t}}\n\
         \tconst props{annotation} = {{ ...defaultProps, ...values }}\n\
         \treturn render(<{name} {{...props}} />)\n\
         }}",
        helper = render_helper(name),
        defaults = defaults.join("\n"),
    )
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("\t{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
