use crate::dependency_tree::domain::DependencyNode;
use crate::dependency_tree::services::{SummaryAggregator, TreeRenderer};
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TreeFormatter adapter for the default human-readable output
///
/// Draws every path of the tree, then appends a one-line summary
/// of the unique packages below the root.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TreeFormatter {
    fn format(&self, root: &DependencyNode) -> Result<String> {
        let mut output = String::new();
        TreeRenderer::render(&mut output, root, 0, false)?;
        writeln!(output, "{}", SummaryAggregator::summarize(root))?;
        Ok(output)
    }
}
