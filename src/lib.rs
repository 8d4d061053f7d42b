//! depth - dependency tree visualization
//!
//! This library resolves the dependency tree of a package, draws it as an
//! indented tree or serializes it as JSON, and summarizes the unique packages
//! it contains. It follows hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Tree model, rendering and summary services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depth::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let index = FileSystemReader::new().read_index(Path::new("depth.toml"))?;
//!
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     IndexResolver::new(index),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let request = DepthRequest::new(
//!     vec!["app".to_string()],
//!     ResolveOptions::default(),
//!     OutputFormat::Tree,
//! );
//! use_case.execute(request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
    pub use crate::adapters::outbound::resolver::IndexResolver;
    pub use crate::application::dto::{DepthRequest, DepthResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_tree::domain::{
        DependencyNode, PackageEntry, PackageIndex, PackageName, ResolveOptions, Summary,
    };
    pub use crate::dependency_tree::services::{SummaryAggregator, TreeRenderer};
    pub use crate::ports::outbound::{
        DependencyFormatter, DependencyResolver, OutputPresenter, PackageIndexReader,
        ProgressReporter,
    };
    pub use crate::shared::error::{DepthError, ExitCode};
    pub use crate::shared::Result;
}
