//! ComponentPipeline: recognize → resolve → schema → classify → synthesize,
//! then merge, format and write.
//!
//! Stages run strictly in sequence per component. A directory run fans
//! components out over rayon; the only shared state is the parse cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use rendergen_core::config::RendergenConfig;
use rendergen_core::errors::{
    GenerationError, GenerationReport, ResolveError, SynthesisError,
};

use crate::components::{ComponentDescriptor, FileIndex};
use crate::format::{formatter_for, SourceFormatter};
use crate::parsers::paths::absolute;
use crate::parsers::{ParseCache, ParsedFile};
use crate::props::{build_schema, SampleGenerator, SemanticModel, SyntacticModel};
use crate::reconcile::{PreservingMerger, TestMerger};
use crate::resolution::TypeResolver;
use crate::scanner::discover_components;
use crate::synthesis::{AnalyzedComponent, ComponentBundle, OutputLocation, TestSynthesizer};
use crate::usage::UsageClassifier;

pub struct ComponentPipeline {
    config: RendergenConfig,
    project_root: PathBuf,
    cache: ParseCache,
    model: Box<dyn SemanticModel + Send + Sync>,
    merger: Box<dyn TestMerger>,
    formatter: Box<dyn SourceFormatter>,
}

impl ComponentPipeline {
    pub fn new(config: RendergenConfig, project_root: &Path) -> Self {
        let merger = PreservingMerger::new(config.synthesis.effective_strip_affix());
        let formatter = formatter_for(&config.output);
        Self {
            config,
            project_root: absolute(project_root),
            cache: ParseCache::new(),
            model: Box::new(SyntacticModel),
            merger: Box::new(merger),
            formatter,
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn SourceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_merger(mut self, merger: Box<dyn TestMerger>) -> Self {
        self.merger = merger;
        self
    }

    pub fn config(&self) -> &RendergenConfig {
        &self.config
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Build the bundle for component `name` declared in `path`.
    ///
    /// Failing to resolve the target's props type is an error; siblings that
    /// fail are logged and left out.
    pub fn analyze(&self, path: &Path, name: &str) -> Result<ComponentBundle, GenerationError> {
        let file = self.cache.get_or_parse(path)?;
        tracing::debug!(
            path = %path.display(),
            parse_time_us = file.parse_time_us,
            "component file ready"
        );
        let index = FileIndex::build(&file, Some(name));
        let resolver = TypeResolver::new(&self.cache, &self.config.resolution);

        let target = index
            .find_component(name)
            .ok_or_else(|| SynthesisError::ComponentNotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
            })?;
        if !target.exported {
            tracing::debug!(component = name, "target component is not exported");
        }
        let main = self.analyze_component(&file, &index, &resolver, target)?;

        let mut bundle = ComponentBundle::new(main);
        for child in index.child_candidates() {
            match self.analyze_component(&file, &index, &resolver, child) {
                Ok(analyzed) => bundle.children.push(analyzed),
                Err(e) => tracing::warn!(
                    component = %child.name,
                    error = %e,
                    "skipping child component"
                ),
            }
        }
        Ok(bundle)
    }

    fn analyze_component(
        &self,
        file: &Arc<ParsedFile>,
        index: &FileIndex,
        resolver: &TypeResolver<'_>,
        descriptor: &ComponentDescriptor,
    ) -> Result<AnalyzedComponent, ResolveError> {
        let resolved = resolver
            .resolve(file, index, &descriptor.props_type.name)
            .inspect_err(|e| {
                tracing::warn!(
                    component = %descriptor.name,
                    type_name = %descriptor.props_type.name,
                    path = %file.path.display(),
                    "{e}"
                );
            })?;

        let mut samples =
            SampleGenerator::for_component(self.config.sampling.seed, &descriptor.name);
        let mut fields = build_schema(&resolved.declaration, self.model.as_ref(), &mut samples);

        if let Some(node) = file.node_at(&descriptor.span) {
            UsageClassifier::new(self.config.synthesis.effective_test_id_attribute())
                .classify(file, node, &mut fields);
        }

        Ok(AnalyzedComponent {
            descriptor: descriptor.clone(),
            props_type: resolved,
            fields,
        })
    }

    pub fn output_location(&self, path: &Path) -> OutputLocation {
        OutputLocation::new(
            path,
            &self.project_root,
            self.config.output.effective_tests_dir(),
        )
    }

    /// `<component dir>/__tests__/<Name>.test.<ext>`
    pub fn output_path(&self, path: &Path, name: &str) -> PathBuf {
        self.output_location(path).tests_dir.join(format!(
            "{name}.test.{}",
            self.config.output.effective_test_extension()
        ))
    }

    /// Freshly synthesized test text, before merging and formatting.
    pub fn generate(&self, path: &Path, name: &str) -> Result<String, GenerationError> {
        let bundle = self.analyze(path, name)?;
        let text = TestSynthesizer::new(&self.config.synthesis).synthesize(
            &bundle,
            name,
            &self.output_location(path),
        )?;
        Ok(text)
    }

    /// Final file content: synthesized, merged with any prior file, formatted.
    pub fn render(&self, path: &Path, name: &str) -> Result<String, GenerationError> {
        let generated = self.generate(path, name)?;
        let output = self.output_path(path, name);
        let merged = if self.config.output.effective_merge_existing() && output.is_file() {
            self.merger.merge(&generated, &output, name)?
        } else {
            generated
        };
        Ok(self.formatter.format(&merged)?)
    }

    /// Generate and write the test file for one component.
    pub fn process_component(&self, path: &Path, name: &str) -> Result<PathBuf, GenerationError> {
        let text = self.render(path, name)?;
        let output = self.output_path(path, name);
        if let Some(dir) = output.parent() {
            std::fs::create_dir_all(dir).map_err(|source| GenerationError::WriteFailed {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&output, text).map_err(|source| GenerationError::WriteFailed {
            path: output.clone(),
            source,
        })?;
        tracing::info!(component = name, path = %output.display(), "generated test");
        Ok(output)
    }

    /// Process every component found under `dir`. Failures are collected, never fatal.
    pub fn process_directory(&self, dir: &Path) -> GenerationReport<Vec<PathBuf>> {
        let targets = discover_components(dir);
        tracing::info!(dir = %dir.display(), components = targets.len(), "processing directory");

        let results: Vec<(String, Result<PathBuf, GenerationError>)> = targets
            .par_iter()
            .map(|t| (t.name.clone(), self.process_component(&t.path, &t.name)))
            .collect();

        let mut report = GenerationReport::new(Vec::new());
        for (name, result) in results {
            match result {
                Ok(path) => report.data.push(path),
                Err(e) => {
                    tracing::warn!(component = %name, error = %e, "component failed");
                    report.add_error(name, e);
                }
            }
        }
        tracing::info!(
            written = report.data.len(),
            failed = report.error_count(),
            hit_rate = self.cache.hit_rate(),
            "directory done"
        );
        report
    }
}
