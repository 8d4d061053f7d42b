use crate::dependency_tree::domain::{DependencyNode, PackageIndex, ResolveOptions};
use crate::ports::outbound::DependencyResolver;
use crate::shared::Result;
use std::collections::HashSet;

/// Message for a root package that is missing from the index
const ROOT_NOT_RESOLVED: &str = "unable to resolve root package";

/// IndexResolver adapter resolving dependency trees from a package index
///
/// Resolution rules:
/// - a name missing from the index becomes an unresolved leaf
/// - a package already expanded elsewhere in the same tree is not expanded again
/// - nodes at the maximum depth are not expanded
/// - internal packages below the root are only expanded with `resolve_internal`
/// - test dependencies are only followed with `resolve_test`
/// - edges back to an ancestor are dropped
/// - children are ordered internal first, then by name
pub struct IndexResolver {
    index: PackageIndex,
}

/// Per-resolution bookkeeping, discarded once the tree is built
struct ResolveState<'a> {
    options: &'a ResolveOptions,
    seen: HashSet<&'a str>,
    ancestors: Vec<&'a str>,
}

impl IndexResolver {
    pub fn new(index: PackageIndex) -> Self {
        Self { index }
    }

    fn resolve_node<'a>(
        &'a self,
        name: &'a str,
        test: bool,
        depth: usize,
        state: &mut ResolveState<'a>,
    ) -> DependencyNode {
        let node = DependencyNode::new(name).with_test(test);

        let Some(entry) = self.index.get(name) else {
            return node.with_resolved(false);
        };
        let node = node.with_internal(entry.is_internal());

        // `insert` runs first so every visit marks the name as seen
        let already_expanded = !state.seen.insert(name);
        if already_expanded || state.options.is_at_max_depth(depth) {
            return node;
        }
        if entry.is_internal() && !state.options.resolve_internal && depth > 0 {
            return node;
        }

        let test_dependencies: &[_] = if state.options.resolve_test {
            entry.test_dependencies()
        } else {
            &[]
        };
        let edges = entry
            .dependencies()
            .iter()
            .map(|dep| (dep.as_str(), false))
            .chain(test_dependencies.iter().map(|dep| (dep.as_str(), true)));

        state.ancestors.push(name);
        let mut unique = HashSet::new();
        let mut children = Vec::new();
        for (dep, is_test) in edges {
            if !unique.insert(dep) || state.ancestors.contains(&dep) {
                continue;
            }
            children.push(self.resolve_node(dep, is_test, depth + 1, state));
        }
        state.ancestors.pop();

        children.sort_by(|a, b| {
            b.is_internal()
                .cmp(&a.is_internal())
                .then_with(|| a.name().cmp(b.name()))
        });
        node.with_children(children)
    }
}

impl DependencyResolver for IndexResolver {
    fn resolve(&self, package: &str, options: &ResolveOptions) -> Result<DependencyNode> {
        let Some(root) = self.index.get(package.trim()) else {
            anyhow::bail!(ROOT_NOT_RESOLVED);
        };

        let mut state = ResolveState {
            options,
            seen: HashSet::new(),
            ancestors: Vec::new(),
        };
        Ok(self.resolve_node(root.name().as_str(), false, 0, &mut state))
    }
}
