//! rendergen: generate jest render tests for React Native components.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rendergen_analysis::ComponentPipeline;
use rendergen_core::config::CliOverrides;
use rendergen_core::errors::ErrorCode;
use rendergen_core::tracing::init_tracing;
use rendergen_core::RendergenConfig;

/// Generate render tests from component props types
#[derive(Debug, Parser)]
#[command(name = "rendergen", version, about = "Synthesize jest tests for TSX components")]
struct Cli {
    /// Components directory laid out as `<category>/<Component>/index.tsx`
    #[arg(required_unless_present = "file")]
    dir: Option<PathBuf>,

    /// Process a single component file instead of a directory
    #[arg(long, requires = "name", conflicts_with = "dir")]
    file: Option<PathBuf>,

    /// Component to synthesize from `--file`
    #[arg(long)]
    name: Option<String>,

    /// Project root holding `rendergen.toml` and the helpers module
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Fix the sample-value seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Overwrite existing test files instead of merging
    #[arg(long)]
    no_merge: bool,

    /// Print the generated test instead of writing it (with `--file`)
    #[arg(long, requires = "file")]
    dry_run: bool,

    /// Print the analyzed component bundle as JSON (with `--file`)
    #[arg(long, requires = "file")]
    bundle_json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let overrides = CliOverrides {
        seed: cli.seed,
        merge_existing: cli.no_merge.then_some(false),
        ..Default::default()
    };
    let config = match RendergenConfig::load(&cli.root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.tagged_string());
            return ExitCode::from(2);
        }
    };
    tracing::debug!(root = %cli.root.display(), seed = ?config.sampling.seed, "configuration loaded");
    let pipeline = ComponentPipeline::new(config, &absolute(&cli.root));

    match (&cli.file, &cli.name, &cli.dir) {
        (Some(file), Some(name), _) => run_single(&pipeline, &cli, &absolute(file), name),
        (None, _, Some(dir)) => {
            let report = pipeline.process_directory(&absolute(dir));
            for path in &report.data {
                println!("{}", path.display());
            }
            for (component, error) in &report.errors {
                eprintln!("{component}: {}", error.tagged_string());
            }
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        _ => ExitCode::from(2),
    }
}

fn run_single(pipeline: &ComponentPipeline, cli: &Cli, file: &Path, name: &str) -> ExitCode {
    if cli.bundle_json {
        return print_bundle(pipeline, file, name);
    }
    let result = if cli.dry_run {
        pipeline.render(file, name)
    } else {
        pipeline
            .process_component(file, name)
            .map(|path| path.display().to_string())
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{name}: {}", e.tagged_string());
            ExitCode::FAILURE
        }
    }
}

fn print_bundle(pipeline: &ComponentPipeline, file: &Path, name: &str) -> ExitCode {
    let bundle = match pipeline.analyze(file, name) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("{name}: {}", e.tagged_string());
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(&bundle) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{name}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Relative import paths are computed between absolute locations.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
