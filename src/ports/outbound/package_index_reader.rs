use crate::dependency_tree::domain::PackageIndex;
use crate::shared::Result;
use std::path::Path;

/// PackageIndexReader port for loading a package index
///
/// This port abstracts the storage of the declarative package index
/// the bundled resolver works from.
pub trait PackageIndexReader {
    /// Reads and parses the package index at `index_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The index file does not exist or cannot be read
    /// - The content is not a valid package index
    fn read_index(&self, index_path: &Path) -> Result<PackageIndex>;
}
