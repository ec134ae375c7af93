use crate::layout::{Algorithm, GOLDEN_RATIO};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Child ordering applied before layout. Row composition in squarify and
/// binaryTree follows child order, so sorting is a preprocessing step, not
/// part of the partitioning itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Unsorted,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Algorithm for levels without an explicit entry in `level_algorithms`.
    pub algorithm: Algorithm,
    /// Per-level overrides, indexed by level (root = 0).
    pub level_algorithms: Vec<Algorithm>,
    pub sort: SortOrder,
    /// Target aspect ratio for squarify; values below 1 are clamped to 1.
    pub squarify_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Squarify,
            level_algorithms: Vec::new(),
            sort: SortOrder::Unsorted,
            squarify_ratio: GOLDEN_RATIO,
        }
    }
}

impl LayoutConfig {
    pub fn algorithm_for_level(&self, level: usize) -> Algorithm {
        self.level_algorithms
            .get(level)
            .copied()
            .unwrap_or(self.algorithm)
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let parsed: LayoutConfig = serde_json::from_str(&contents)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_level_override_falls_back_to_default() {
        let config = LayoutConfig {
            level_algorithms: vec![Algorithm::Dice, Algorithm::Slice],
            ..LayoutConfig::default()
        };
        assert_eq!(config.algorithm_for_level(0), Algorithm::Dice);
        assert_eq!(config.algorithm_for_level(1), Algorithm::Slice);
        assert_eq!(config.algorithm_for_level(2), Algorithm::Squarify);
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = r#"{"algorithm":"binaryTree","sort":"descending","squarifyRatio":1.0}"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.algorithm, Algorithm::BinaryTree);
        assert_eq!(config.sort, SortOrder::Descending);
        assert_eq!(config.squarify_ratio, 1.0);
        assert!(config.level_algorithms.is_empty());
    }
}
