//! Grid placement of graph nodes

use crate::types::{LineageId, Position};

/// Vertical distance between consecutive rows
pub const ROW_HEIGHT: u64 = 80;

/// Horizontal distance between lineage lanes
pub const LANE_WIDTH: u64 = 40;

/// Horizontal offset of lane 0
pub const BASE_X: u64 = 100;

/// Grid dimensions used when placing nodes
///
/// Lanes are indexed by lineage id and never compacted, so a lineage that
/// stops early leaves its lane empty below that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Vertical distance between rows
    pub row_height: u64,
    /// Horizontal distance between lanes
    pub lane_width: u64,
    /// Horizontal offset of lane 0
    pub base_x: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            lane_width: LANE_WIDTH,
            base_x: BASE_X,
        }
    }
}

impl LayoutConfig {
    /// Position of the commit at `row` (input index) on `lineage`'s lane
    pub const fn position(&self, row: usize, lineage: LineageId) -> Position {
        Position {
            x: self.base_x + lineage.0 as u64 * self.lane_width,
            y: row as u64 * self.row_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.position(0, LineageId(0)), Position { x: 100, y: 0 });
        assert_eq!(layout.position(3, LineageId(2)), Position { x: 180, y: 240 });
    }

    #[test]
    fn test_custom_grid() {
        let layout = LayoutConfig {
            row_height: 1,
            lane_width: 2,
            base_x: 0,
        };
        assert_eq!(layout.position(5, LineageId(4)), Position { x: 8, y: 5 });
    }
}
