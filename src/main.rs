mod cli;

use cli::Args;
use depth::config::{self, ConfigFile, DEFAULT_INDEX_FILENAME};
use depth::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        // The FATAL line is already on stdout
        Err(e) if is_resolution_failure(&e) => ExitCode::ResolutionFailure,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn run() -> Result<()> {
    // Parse command-line arguments (exits with code 2 on invalid input)
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = &config {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }

    let request = build_request(&args, config.as_ref());
    if request.packages.is_empty() {
        // Nothing to resolve, so a missing index is not an error
        progress_reporter.report_error("No packages specified; nothing to analyze.");
        return Ok(());
    }

    // Load the package index backing the resolver
    let index_path = resolve_index_path(&args, config.as_ref());
    let index = FileSystemReader::new().read_index(&index_path)?;
    progress_reporter.report(&format!(
        "📖 Loaded {} package(s) from {}",
        index.len(),
        index_path.display()
    ));

    // Create use case with injected dependencies
    let use_case = AnalyzeDependenciesUseCase::new(
        IndexResolver::new(index),
        StdoutPresenter::new(),
        progress_reporter,
    );
    use_case.execute(request)?;

    Ok(())
}

fn is_resolution_failure(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<DepthError>()
        .is_some_and(DepthError::is_resolution_failure)
}

fn load_config(explicit_path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// Command line wins over the config file, which wins over the default file name
fn resolve_index_path(args: &Args, config: Option<&ConfigFile>) -> PathBuf {
    args.index
        .clone()
        .or_else(|| config.and_then(|c| c.index.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILENAME))
}

/// Merges flags with config defaults; a flag given on the command line always wins
fn build_request(args: &Args, config: Option<&ConfigFile>) -> DepthRequest {
    let config_flag = |pick: fn(&ConfigFile) -> Option<bool>| {
        config.and_then(pick).unwrap_or(false)
    };

    let options = ResolveOptions::new(
        args.internal || config_flag(|c| c.internal),
        args.test || config_flag(|c| c.test),
        args.max_depth
            .or_else(|| config.and_then(|c| c.max_depth))
            .unwrap_or(0),
    );
    let format = OutputFormat::from_json_flag(args.json || config_flag(|c| c.json));

    DepthRequest::new(args.packages.clone(), options, format)
}
