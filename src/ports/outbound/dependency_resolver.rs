use crate::dependency_tree::domain::{DependencyNode, ResolveOptions};
use crate::shared::Result;

/// DependencyResolver port for building the dependency tree of a package
///
/// This port abstracts how dependencies are discovered and classified
/// (internal vs. external packages, test-only edges, cycles, depth limits).
/// The rendering and summary code only ever sees the returned tree.
pub trait DependencyResolver {
    /// Resolves the dependency tree rooted at `package`
    ///
    /// # Arguments
    /// * `package` - Name of the requested root package
    /// * `options` - Which edges and packages to expand, and how deep
    ///
    /// # Returns
    /// The root DependencyNode with its resolved descendants
    ///
    /// # Errors
    /// Returns an error when the root package cannot be resolved. The error
    /// message is shown to the user verbatim.
    fn resolve(&self, package: &str, options: &ResolveOptions) -> Result<DependencyNode>;
}
