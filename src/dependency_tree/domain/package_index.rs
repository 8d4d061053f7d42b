use super::PackageName;
use crate::shared::Result;
use std::collections::HashMap;

/// PackageEntry describes one package known to a package index
#[derive(Debug, Clone, PartialEq)]
pub struct PackageEntry {
    name: PackageName,
    internal: bool,
    dependencies: Vec<PackageName>,
    test_dependencies: Vec<PackageName>,
}

impl PackageEntry {
    pub fn new(
        name: PackageName,
        internal: bool,
        dependencies: Vec<PackageName>,
        test_dependencies: Vec<PackageName>,
    ) -> Self {
        Self {
            name,
            internal,
            dependencies,
            test_dependencies,
        }
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn dependencies(&self) -> &[PackageName] {
        &self.dependencies
    }

    pub fn test_dependencies(&self) -> &[PackageName] {
        &self.test_dependencies
    }
}

/// PackageIndex aggregate: every package a resolver can look up, keyed by name
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    entries: HashMap<String, PackageEntry>,
}

impl PackageIndex {
    /// Builds an index, rejecting duplicate package names
    pub fn new(entries: Vec<PackageEntry>) -> Result<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = entry.name().as_str().to_string();
            if map.contains_key(&key) {
                anyhow::bail!("Package '{}' is declared more than once", key);
            }
            map.insert(key, entry);
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, name: &str) -> Option<&PackageEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
