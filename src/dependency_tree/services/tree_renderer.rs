use crate::dependency_tree::domain::DependencyNode;
use std::fmt::{self, Write};

/// Indentation unit written once per depth level
const PADDING: &str = "  ";

/// Connector for every child except the last one
const BRANCH: &str = "├ ";

/// Connector for the last child of a node
const CORNER: &str = "└ ";

/// TreeRenderer service for drawing a dependency tree as indented text
///
/// Every node is drawn, including repeated packages from diamond dependencies:
/// the tree shows paths, not unique packages.
pub struct TreeRenderer;

impl TreeRenderer {
    /// Writes one line for `node` and then, depth-first, the lines of its children
    ///
    /// # Arguments
    /// * `out` - Sink receiving the lines, each terminated by `\n`
    /// * `node` - The node to draw
    /// * `depth` - Depth of `node` (the root is 0)
    /// * `is_last` - Whether `node` is the last child of its parent (ignored at depth 0)
    pub fn render<W: Write>(
        out: &mut W,
        node: &DependencyNode,
        depth: usize,
        is_last: bool,
    ) -> fmt::Result {
        let connector = match (depth, is_last) {
            (0, _) => "",
            (_, true) => CORNER,
            (_, false) => BRANCH,
        };
        writeln!(out, "{}{}{}", PADDING.repeat(depth), connector, node)?;

        let last_index = node.children().len().saturating_sub(1);
        for (index, child) in node.children().iter().enumerate() {
            Self::render(out, child, depth + 1, index == last_index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_lines(root: &DependencyNode) -> Vec<String> {
        let mut out = String::new();
        TreeRenderer::render(&mut out, root, 0, false).unwrap();
        out.lines().map(str::to_string).collect()
    }

    fn diamond() -> DependencyNode {
        DependencyNode::new("app").with_children(vec![
            DependencyNode::new("libA").with_children(vec![DependencyNode::new("libC")]),
            DependencyNode::new("libB")
                .with_internal(true)
                .with_test(true)
                .with_children(vec![DependencyNode::new("libC")]),
        ])
    }

    #[test]
    fn test_leaf_root_renders_single_line_without_connector() {
        let lines = render_lines(&DependencyNode::new("solo"));
        assert_eq!(lines, vec!["solo"]);
    }

    #[test]
    fn test_is_last_ignored_at_depth_zero() {
        let mut out = String::new();
        TreeRenderer::render(&mut out, &DependencyNode::new("root"), 0, true).unwrap();
        assert_eq!(out, "root\n");
    }

    #[test]
    fn test_diamond_renders_every_path() {
        let lines = render_lines(&diamond());
        assert_eq!(
            lines,
            vec!["app", "  ├ libA", "    └ libC", "  └ libB", "    └ libC"]
        );
    }

    #[test]
    fn test_only_last_child_gets_corner() {
        let root = DependencyNode::new("root").with_children(vec![
            DependencyNode::new("same"),
            DependencyNode::new("same"),
            DependencyNode::new("same"),
            DependencyNode::new("same"),
        ]);
        let lines = render_lines(&root);

        let corners = lines.iter().filter(|l| l.contains(CORNER)).count();
        let branches = lines.iter().filter(|l| l.contains(BRANCH)).count();
        assert_eq!(corners, 1);
        assert_eq!(branches, 3);
        assert_eq!(lines.last().unwrap(), "  └ same");
    }

    #[test]
    fn test_unresolved_node_is_marked() {
        let root = DependencyNode::new("app")
            .with_children(vec![DependencyNode::new("ghost").with_resolved(false)]);
        let lines = render_lines(&root);
        assert_eq!(lines, vec!["app", "  └ ghost (unresolved)"]);
    }

    #[test]
    fn test_render_at_nested_depth() {
        let mut out = String::new();
        let node = DependencyNode::new("mid").with_children(vec![DependencyNode::new("leaf")]);
        TreeRenderer::render(&mut out, &node, 2, false).unwrap();
        assert_eq!(out, "    ├ mid\n      └ leaf\n");
    }
}
