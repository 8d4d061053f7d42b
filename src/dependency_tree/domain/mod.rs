/// Domain layer - Pure business logic and domain models
///
/// This module contains the core domain models for dependency trees.
/// It has no dependencies on infrastructure concerns (I/O, formats, etc.).
mod dependency_node;
mod package;
mod package_index;
mod resolve_options;
mod summary;

pub use dependency_node::DependencyNode;
pub use package::PackageName;
pub use package_index::{PackageEntry, PackageIndex};
pub use resolve_options::ResolveOptions;
pub use summary::Summary;
