//! Collision Detection
//!
//! Player vs. tree collision, evaluated once per tick after integration.
//!
//! Rule order:
//! 1. Any trunk overlap crushes the player and ends the pass.
//! 2. Every leaf tier the player overlaps while falling, with its bottom edge
//!    at or above the tier's bottom edge, is a landing candidate. The last
//!    candidate in tree/tier order wins the snap. Rising players and players
//!    dropping through a leaf pass through.
//! 3. A player that did not land, is not driven by a jump and was not moved
//!    by gravity this tick keeps falling by its current velocity.

use crate::core::rect::Rect;
use crate::game::map::{LeafTier, Tree};
use crate::game::physics::Motion;
use crate::game::state::Player;
use crate::GROUND_LINE;

/// What the collision pass did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Touched a trunk
    Crushed {
        /// Tree index
        tree: u8,
    },
    /// Snapped on top of a leaf tier
    LandedOnLeaf {
        /// Tree index
        tree: u8,
        /// Tier landed on
        tier: LeafTier,
    },
    /// Secondary fall reached the ground line
    LandedOnGround,
    /// Nothing to report
    Clear,
}

/// Find the first trunk the player overlaps.
pub fn check_trunks(player: &Player, trees: &[Tree]) -> Option<u8> {
    let rect = player.rect();
    trees
        .iter()
        .find(|tree| rect.intersects(&tree.trunk()))
        .map(|tree| tree.id)
}

/// Check if a leaf catches a player moving with `velocity`.
#[inline]
pub fn catches(player: &Rect, velocity: i32, leaf: &Rect) -> bool {
    player.intersects(leaf) && velocity > 0 && player.bottom() <= leaf.bottom()
}

/// Find the leaf a falling player lands on.
///
/// All tiers are evaluated against the incoming rectangle; the last match in
/// iteration order wins.
pub fn check_leaves(player: &Player, trees: &[Tree]) -> Option<(u8, LeafTier, Rect)> {
    if player.dropping {
        return None;
    }

    let rect = player.rect();
    let mut landing = None;

    for tree in trees {
        for (tier, leaf) in tree.leaves() {
            if catches(&rect, player.velocity, &leaf) {
                landing = Some((tree.id, tier, leaf));
            }
        }
    }

    landing
}

/// Find the leaf the player is standing on (bottom flush with the tier top).
pub fn footing(player: &Player, trees: &[Tree]) -> Option<(u8, LeafTier)> {
    let rect = player.rect();

    for tree in trees {
        for (tier, leaf) in tree.leaves() {
            if rect.bottom() == leaf.top() && rect.overlaps_horizontally(&leaf) {
                return Some((tree.id, tier));
            }
        }
    }

    None
}

/// Check if the player overlaps any leaf tier.
pub fn overlaps_leaf(player: &Player, trees: &[Tree]) -> bool {
    let rect = player.rect();
    trees
        .iter()
        .flat_map(|tree| tree.leaves())
        .any(|(_, leaf)| rect.intersects(&leaf))
}

/// Run the collision pass on the player.
///
/// `motion` is what integration did this tick.
pub fn resolve(player: &mut Player, trees: &[Tree], motion: Motion) -> CollisionOutcome {
    // 1. Trunks are fatal and end the pass
    if let Some(tree) = check_trunks(player, trees) {
        return CollisionOutcome::Crushed { tree };
    }

    // 2. One-way leaf platforms
    if let Some((tree, tier, leaf)) = check_leaves(player, trees) {
        player.y = leaf.top() - player.height;
        player.land();
        return CollisionOutcome::LandedOnLeaf { tree, tier };
    }

    // 3. Secondary fall
    if motion == Motion::Resting && !player.jump_state.is_airborne() && player.velocity != 0 {
        player.y += player.velocity;

        if player.y >= GROUND_LINE {
            player.y = GROUND_LINE;
            player.land();
            return CollisionOutcome::LandedOnGround;
        }
    }

    CollisionOutcome::Clear
}
