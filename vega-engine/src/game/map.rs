//! Tree Geometry
//!
//! The three fixed trees of the level. Each tree has a trunk (a hazard) and
//! three leaf tiers (one-way platforms). Geometry never changes at runtime.

use serde::{Serialize, Deserialize};
use crate::core::rect::Rect;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Top edge of the ground band, where every tree stands.
pub const TREE_BASE_Y: i32 = SCREEN_HEIGHT - 50;

/// Trunk width.
pub const TRUNK_WIDTH: i32 = 100;

/// Trunk height.
pub const TRUNK_HEIGHT: i32 = 250;

/// Height of every leaf tier.
pub const LEAF_HEIGHT: i32 = 60;

/// Tree anchors (trunk centre x), left to right.
pub const TREE_ANCHORS: [i32; 3] = [100, SCREEN_WIDTH / 2 - 100, SCREEN_WIDTH - 200];

/// Leaf tier of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LeafTier {
    /// Widest, lowest tier
    Bottom = 0,
    /// Middle tier
    Middle = 1,
    /// Narrowest, highest tier
    Top = 2,
}

impl LeafTier {
    /// All tiers in collision order.
    pub const ALL: [LeafTier; 3] = [LeafTier::Bottom, LeafTier::Middle, LeafTier::Top];

    /// Horizontal extent from the anchor on each side.
    #[inline]
    pub const fn half_width(self) -> i32 {
        match self {
            LeafTier::Bottom => 120,
            LeafTier::Middle => 90,
            LeafTier::Top => 60,
        }
    }

    /// Top edge offset above the tree base.
    #[inline]
    pub const fn rise(self) -> i32 {
        match self {
            LeafTier::Bottom => 300,
            LeafTier::Middle => 350,
            LeafTier::Top => 400,
        }
    }
}

/// A tree standing on the ground band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Index in `TREE_ANCHORS`
    pub id: u8,
    /// Trunk centre x
    pub anchor_x: i32,
    /// Ground y the trunk stands on
    pub base_y: i32,
}

impl Tree {
    /// Create a tree at an anchor.
    pub const fn new(id: u8, anchor_x: i32) -> Self {
        Self {
            id,
            anchor_x,
            base_y: TREE_BASE_Y,
        }
    }

    /// Trunk rectangle (instant death on contact).
    pub const fn trunk(&self) -> Rect {
        Rect::new(
            self.anchor_x - TRUNK_WIDTH / 2,
            self.base_y - TRUNK_HEIGHT,
            TRUNK_WIDTH,
            TRUNK_HEIGHT,
        )
    }

    /// Rectangle of one leaf tier.
    pub const fn leaf(&self, tier: LeafTier) -> Rect {
        let half = tier.half_width();
        Rect::new(
            self.anchor_x - half,
            self.base_y - tier.rise(),
            half * 2,
            LEAF_HEIGHT,
        )
    }

    /// Leaf rectangles, bottom tier first.
    pub fn leaves(&self) -> [(LeafTier, Rect); 3] {
        LeafTier::ALL.map(|tier| (tier, self.leaf(tier)))
    }
}

/// The fixed forest, left to right.
pub fn forest() -> [Tree; 3] {
    [
        Tree::new(0, TREE_ANCHORS[0]),
        Tree::new(1, TREE_ANCHORS[1]),
        Tree::new(2, TREE_ANCHORS[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        assert_eq!(TREE_ANCHORS, [100, 300, 600]);
        let trees = forest();
        assert_eq!(trees[1].anchor_x, 300);
        assert_eq!(trees[2].id, 2);
    }

    #[test]
    fn test_trunk_geometry() {
        let tree = Tree::new(0, 100);
        assert_eq!(tree.trunk(), Rect::new(50, TREE_BASE_Y - 250, 100, 250));
        assert_eq!(tree.trunk().bottom(), TREE_BASE_Y);
    }

    #[test]
    fn test_leaf_geometry() {
        let tree = Tree::new(0, 100);
        assert_eq!(tree.leaf(LeafTier::Bottom), Rect::new(-20, TREE_BASE_Y - 300, 240, 60));
        assert_eq!(tree.leaf(LeafTier::Middle), Rect::new(10, TREE_BASE_Y - 350, 180, 60));
        assert_eq!(tree.leaf(LeafTier::Top), Rect::new(40, TREE_BASE_Y - 400, 120, 60));
    }

    #[test]
    fn test_bottom_leaf_overlaps_trunk_top() {
        // The bottom tier hangs 10 px over the trunk top
        let tree = Tree::new(1, 300);
        assert!(tree.leaf(LeafTier::Bottom).intersects(&tree.trunk()));
    }

    #[test]
    fn test_leaves_order() {
        let tree = Tree::new(2, 600);
        let tiers: Vec<LeafTier> = tree.leaves().iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, LeafTier::ALL.to_vec());
    }
}
