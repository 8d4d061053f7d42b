use std::fmt;

/// Suffix appended to the display string of packages the resolver could not find
const UNRESOLVED_SUFFIX: &str = " (unresolved)";

/// DependencyNode value object representing one package occurrence in a resolved tree
///
/// The same package name may label several nodes when a dependency is reachable
/// through more than one path. Consumers that need per-package answers must
/// deduplicate by name themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    name: String,
    internal: bool,
    resolved: bool,
    test: bool,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Creates a resolved, external, non-test node without children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
            resolved: true,
            test: false,
            children: Vec::new(),
        }
    }

    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    pub fn with_resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Replaces the children of this node, keeping the given order
    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_test(&self) -> bool {
        self.test
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }
}

/// Single-line display string: the package name, marked when unresolved
impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.resolved {
            f.write_str(UNRESOLVED_SUFFIX)?;
        }
        Ok(())
    }
}
