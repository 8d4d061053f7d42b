use crate::dependency_tree::domain::{DependencyNode, Summary};
use std::collections::HashSet;

/// SummaryAggregator service for counting the unique packages below a root
///
/// Packages are deduplicated by name. The first occurrence met in depth-first,
/// children-in-order traversal decides the internal and testing classification;
/// later occurrences and their subtrees are skipped entirely.
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Summarizes the dependencies of `root`; the root itself is not counted
    pub fn summarize(root: &DependencyNode) -> Summary {
        let mut summary = Summary::default();
        let mut visited = HashSet::new();
        for child in root.children() {
            Self::collect(child, &mut summary, &mut visited);
        }
        summary
    }

    fn collect<'a>(
        node: &'a DependencyNode,
        summary: &mut Summary,
        visited: &mut HashSet<&'a str>,
    ) {
        if !visited.insert(node.name()) {
            return;
        }

        summary.record(node.is_internal(), node.is_test());

        for child in node.children() {
            Self::collect(child, summary, visited);
        }
    }
}
