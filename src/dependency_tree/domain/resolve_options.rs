/// Options a resolver honours when building a dependency tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Expand the dependencies of internal (standard library) packages
    pub resolve_internal: bool,
    /// Follow dependency edges that only exist for testing
    pub resolve_test: bool,
    /// Maximum depth to expand; 0 means unbounded
    pub max_depth: usize,
}

impl ResolveOptions {
    pub fn new(resolve_internal: bool, resolve_test: bool, max_depth: usize) -> Self {
        Self {
            resolve_internal,
            resolve_test,
            max_depth,
        }
    }

    /// Returns true when a node at `depth` must not be expanded any further
    pub fn is_at_max_depth(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth >= self.max_depth
    }
}
