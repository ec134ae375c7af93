use crate::layout::Algorithm;
use crate::tree::Node;
use serde::Serialize;

/// Flat, serializable view of a laid-out tree, one entry per node in
/// depth-first order.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub algorithm: String,
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<RectDump>,
}

#[derive(Debug, Serialize)]
pub struct RectDump {
    pub id: String,
    pub level: usize,
    pub value: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl LayoutDump {
    pub fn from_tree(root: &Node, algorithm: Algorithm) -> Self {
        let mut nodes = Vec::new();
        root.visit(&mut |node, level| {
            nodes.push(RectDump {
                id: node.id.clone(),
                level,
                value: node.value,
                x0: node.x0,
                y0: node.y0,
                x1: node.x1,
                y1: node.y1,
            });
        });
        Self {
            algorithm: algorithm.name().to_string(),
            width: root.width(),
            height: root.height(),
            nodes,
        }
    }
}
