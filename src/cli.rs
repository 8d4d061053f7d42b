use clap::Parser;
use std::path::PathBuf;

/// Visualize the dependency tree of one or more packages
#[derive(Parser, Debug)]
#[command(name = "depth")]
#[command(version)]
#[command(
    about = "Visualize the dependency tree of one or more packages",
    long_about = None
)]
pub struct Args {
    /// Packages to resolve, processed and printed in the given order
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Resolve the dependencies of internal (standard library) packages
    #[arg(long)]
    pub internal: bool,

    /// Resolve dependencies used only for testing
    #[arg(long)]
    pub test: bool,

    /// Maximum depth of dependencies to resolve (0 = unbounded)
    #[arg(long = "max", value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Output the dependencies in JSON format
    #[arg(long)]
    pub json: bool,

    /// Path to the package index (defaults to depth.toml)
    #[arg(short, long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Path to a config file (defaults to depth.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
