use crate::dependency_tree::domain::DependencyNode;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

fn default_resolved() -> bool {
    true
}

/// Wire shape of one node; field order here is the field order in the output
#[derive(Debug, Serialize, Deserialize)]
struct JsonNode {
    name: String,
    internal: bool,
    #[serde(default = "default_resolved")]
    resolved: bool,
    test: bool,
    #[serde(default)]
    children: Vec<JsonNode>,
}

impl From<&DependencyNode> for JsonNode {
    fn from(node: &DependencyNode) -> Self {
        Self {
            name: node.name().to_string(),
            internal: node.is_internal(),
            resolved: node.is_resolved(),
            test: node.is_test(),
            children: node.children().iter().map(JsonNode::from).collect(),
        }
    }
}

impl From<JsonNode> for DependencyNode {
    fn from(node: JsonNode) -> Self {
        DependencyNode::new(node.name)
            .with_internal(node.internal)
            .with_resolved(node.resolved)
            .with_test(node.test)
            .with_children(node.children.into_iter().map(DependencyNode::from).collect())
    }
}

/// JsonFormatter adapter for machine-readable output
///
/// Mirrors the tree exactly: repeated packages from diamond dependencies
/// appear as repeated nested objects. Output uses two-space indentation
/// and ends with a newline.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Reads a document produced by [`JsonFormatter::format`] back into a tree
    pub fn parse(&self, content: &str) -> Result<DependencyNode> {
        let node: JsonNode = serde_json::from_str(content)?;
        Ok(node.into())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, root: &DependencyNode) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&JsonNode::from(root))?;
        output.push('\n');
        Ok(output)
    }
}
