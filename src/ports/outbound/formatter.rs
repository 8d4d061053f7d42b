use crate::dependency_tree::domain::DependencyNode;
use crate::shared::Result;

/// DependencyFormatter port for turning a resolved tree into output text
///
/// This port abstracts the output formats (tree text, JSON, etc.).
pub trait DependencyFormatter {
    /// Formats the tree rooted at `root`
    ///
    /// # Returns
    /// The complete output for this root, ending with a newline
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, root: &DependencyNode) -> Result<String>;
}
