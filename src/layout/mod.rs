mod binary_tree;
mod slice_dice;
mod squarify;

use crate::config::LayoutConfig;
use crate::tree::Node;
use serde::{Deserialize, Serialize};

/// Bruls/Huizing/van Wijk target aspect ratio, the d3 default.
pub const GOLDEN_RATIO: f32 = 1.618_034;

/// Partitioning strategy applied to one level of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    Squarify,
    Slice,
    Dice,
    SliceDice,
    BinaryTree,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Squarify => "squarify",
            Algorithm::Slice => "slice",
            Algorithm::Dice => "dice",
            Algorithm::SliceDice => "sliceDice",
            Algorithm::BinaryTree => "binaryTree",
        }
    }
}

/// Partitions exactly one level: assigns a rectangle to each direct child
/// of `parent` out of `parent`'s own rectangle, proportionally to value.
///
/// `level` is the depth of `parent` from the root (root = 0); only
/// `SliceDice` reads it. Recursing into grandchildren is the caller's
/// responsibility. Never fails: empty children is a no-op, a zero-value
/// parent collapses all children to zero-area rectangles, and NaN/negative
/// weights propagate as NaN geometry (documented precondition violations).
pub fn layout_level(parent: &mut Node, algorithm: Algorithm, level: usize) {
    layout_level_ratio(parent, algorithm, level, GOLDEN_RATIO);
}

pub fn layout_level_ratio(parent: &mut Node, algorithm: Algorithm, level: usize, ratio: f32) {
    match algorithm {
        Algorithm::Squarify => squarify::squarify(parent, ratio),
        Algorithm::Slice => slice_dice::slice(parent),
        Algorithm::Dice => slice_dice::dice(parent),
        Algorithm::SliceDice => slice_dice::slice_dice(parent, level),
        Algorithm::BinaryTree => binary_tree::binary(parent),
    }
}

/// Lays out the whole subtree under `root`, whose own bounds must already
/// be set. The algorithm may differ per level via the config.
pub fn layout_tree(root: &mut Node, config: &LayoutConfig) {
    layout_subtree(root, config, 0);
}

fn layout_subtree(node: &mut Node, config: &LayoutConfig, level: usize) {
    if node.children.is_empty() {
        return;
    }
    let algorithm = config.algorithm_for_level(level);
    layout_level_ratio(node, algorithm, level, config.squarify_ratio);
    for child in &mut node.children {
        layout_subtree(child, config, level + 1);
    }
}
