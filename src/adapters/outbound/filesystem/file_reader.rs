use crate::dependency_tree::domain::{PackageEntry, PackageIndex, PackageName};
use crate::ports::outbound::PackageIndexReader;
use crate::shared::error::DepthError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct IndexFile {
    #[serde(default)]
    package: Vec<IndexPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct IndexPackage {
    name: String,
    #[serde(default)]
    internal: bool,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    test_dependencies: Vec<String>,
}

/// FileSystemReader adapter for reading the package index from the file system
///
/// The index is a TOML document with one `[[package]]` table per package:
///
/// ```toml
/// [[package]]
/// name = "app"
/// internal = false
/// dependencies = ["liba", "libb"]
/// test-dependencies = ["check"]
/// ```
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses index content; `index_path` is only used in error messages
    pub fn parse_index(&self, content: &str, index_path: &Path) -> Result<PackageIndex> {
        let parse_error = |details: String| DepthError::IndexParseError {
            path: index_path.to_path_buf(),
            details,
        };

        let file: IndexFile =
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let entries = file
            .package
            .into_iter()
            .map(Self::to_entry)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| parse_error(e.to_string()))?;

        PackageIndex::new(entries).map_err(|e| parse_error(e.to_string()).into())
    }

    fn to_entry(package: IndexPackage) -> Result<PackageEntry> {
        let to_names = |names: Vec<String>| {
            names
                .into_iter()
                .map(PackageName::new)
                .collect::<Result<Vec<_>>>()
        };

        Ok(PackageEntry::new(
            PackageName::new(package.name)?,
            package.internal,
            to_names(package.dependencies)?,
            to_names(package.test_dependencies)?,
        ))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageIndexReader for FileSystemReader {
    fn read_index(&self, index_path: &Path) -> Result<PackageIndex> {
        if !index_path.exists() {
            return Err(DepthError::IndexNotFound {
                path: index_path.to_path_buf(),
                suggestion: "Create a depth.toml package index in the current directory, \
                             or point to one with the --index option."
                    .to_string(),
            }
            .into());
        }

        let content = read_regular_file(index_path, "package index")?;
        self.parse_index(&content, index_path)
    }
}
