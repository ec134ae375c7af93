use crate::tree::Node;
use serde::Deserialize;
use thiserror::Error;

/// A weighted hierarchy as it appears in an input file (JSON or JSON5).
/// Internal nodes may omit `value`; it is derived from their children.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub value: Option<f32>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse hierarchy: {0}")]
    Parse(#[from] json5::Error),
    #[error("node {name:?} has a negative or non-finite value {value}")]
    InvalidValue { name: String, value: f32 },
}

/// Parses a JSON/JSON5 hierarchy into a layout-ready tree with resolved
/// values. This is the boundary where weights are validated; the layout
/// algorithms themselves never are.
pub fn parse_tree(input: &str) -> Result<Node, InputError> {
    let spec: NodeSpec = json5::from_str(input)?;
    let mut root = build_node(&spec)?;
    root.sum_values();
    Ok(root)
}

fn build_node(spec: &NodeSpec) -> Result<Node, InputError> {
    let value = spec.value.unwrap_or(0.0);
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::InvalidValue {
            name: spec.name.clone(),
            value,
        });
    }
    let children = spec
        .children
        .iter()
        .map(build_node)
        .collect::<Result<Vec<_>, _>>()?;
    let mut node = Node::branch(spec.name.clone(), children);
    node.value = value;
    Ok(node)
}
