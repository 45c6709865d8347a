//! Jump State Machine and Integration
//!
//! Fixed-step explicit Euler: every tick adds `GRAVITY` to the velocity and
//! the velocity to the position. No delta-time scaling; simulation speed is
//! bound to the frame rate.

use crate::game::state::{JumpState, Player};
use crate::{GROUND_LINE, SCREEN_HEIGHT};

/// Gravity (pixels/tick^2).
pub const GRAVITY: i32 = 1;

/// First jump impulse (pixels/tick, upward).
pub const JUMP_SPEED: i32 = 15;

/// Second jump impulse.
pub const DOUBLE_JUMP_SPEED: i32 = JUMP_SPEED * 2;

/// Horizontal and move-down step per key-down event.
pub const MOVE_STEP: i32 = 5;

/// A player whose bottom edge reaches this y while pressing down is crushed.
pub const GROUND_TRIGGER_Y: i32 = SCREEN_HEIGHT - 90;

/// Result of a jump intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Grounded -> Jumping
    Jumped,
    /// Jumping -> DoubleJumping
    DoubleJumped,
    /// Both jumps already used
    Ignored,
}

/// Result of a move-down intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    /// Stepped down
    Moved,
    /// Already in the ground trigger zone
    Crushed,
}

/// Vertical motion produced by [`integrate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Held in place (supported or clamped to the ground line)
    Resting,
    /// Moved by gravity this tick
    Falling,
    /// Moved by gravity and reached the ground line
    Landed,
}

/// Apply a jump intent.
pub fn jump(player: &mut Player) -> JumpOutcome {
    match player.jump_state {
        JumpState::Grounded => {
            player.velocity = -JUMP_SPEED;
            player.jump_state = JumpState::Jumping;
            JumpOutcome::Jumped
        }
        JumpState::Jumping => {
            player.velocity = -DOUBLE_JUMP_SPEED;
            player.jump_state = JumpState::DoubleJumping;
            JumpOutcome::DoubleJumped
        }
        JumpState::DoubleJumping => JumpOutcome::Ignored,
    }
}

/// Step left, stopping at the screen edge.
#[inline]
pub fn move_left(player: &mut Player) {
    player.x = (player.x - MOVE_STEP).max(0);
}

/// Step right, stopping at the screen edge.
#[inline]
pub fn move_right(player: &mut Player) {
    player.x = (player.x + MOVE_STEP).min(player.max_x());
}

/// Step down, or report a crush when already at the ground trigger.
///
/// The caller owns the crushed flag (see `World::crush`).
pub fn move_down(player: &mut Player) -> DownOutcome {
    if player.bottom() >= GROUND_TRIGGER_Y {
        DownOutcome::Crushed
    } else {
        player.y += MOVE_STEP;
        DownOutcome::Moved
    }
}

/// Integrate one tick of vertical motion.
///
/// `supported` is true when the player stands on top of a leaf; a grounded,
/// supported player does not move.
pub fn integrate(player: &mut Player, supported: bool) -> Motion {
    match player.jump_state {
        JumpState::Jumping | JumpState::DoubleJumping => fall_step(player),
        JumpState::Grounded if supported => Motion::Resting,
        JumpState::Grounded if player.y < GROUND_LINE => fall_step(player),
        JumpState::Grounded => {
            player.y = GROUND_LINE;
            player.velocity = 0;
            Motion::Resting
        }
    }
}

fn fall_step(player: &mut Player) -> Motion {
    player.velocity += GRAVITY;
    player.y += player.velocity;

    if player.velocity >= 0 && player.y >= GROUND_LINE {
        player.y = GROUND_LINE;
        player.land();
        return Motion::Landed;
    }

    Motion::Falling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLAYER_SIZE;
    use proptest::prelude::*;

    #[test]
    fn test_jump_state_machine() {
        let mut player = Player::spawn();

        assert_eq!(jump(&mut player), JumpOutcome::Jumped);
        assert_eq!(player.jump_state, JumpState::Jumping);
        assert_eq!(player.velocity, -15);

        assert_eq!(jump(&mut player), JumpOutcome::DoubleJumped);
        assert_eq!(player.jump_state, JumpState::DoubleJumping);
        assert_eq!(player.velocity, -30);

        // Third jump has no effect
        assert_eq!(jump(&mut player), JumpOutcome::Ignored);
        assert_eq!(player.jump_state, JumpState::DoubleJumping);
        assert_eq!(player.velocity, -30);
    }

    #[test]
    fn test_double_jump_next_tick() {
        let mut player = Player::spawn();
        jump(&mut player);
        integrate(&mut player, false);
        assert_eq!(player.velocity, -14);

        jump(&mut player);
        assert_eq!(player.velocity, -30);
    }

    #[test]
    fn test_single_jump_arc_returns_to_ground() {
        let mut player = Player::spawn();
        jump(&mut player);

        let mut highest = player.y;
        let mut ticks = 0;
        loop {
            ticks += 1;
            let landed = integrate(&mut player, false) == Motion::Landed;
            highest = highest.min(player.y);
            if landed {
                break;
            }
            assert!(ticks < 100, "jump never landed");
        }

        // 14 + 13 + ... + 1 pixels of rise
        assert_eq!(highest, GROUND_LINE - 105);
        assert_eq!(player.y, GROUND_LINE);
        assert_eq!(player.velocity, 0);
        assert_eq!(player.jump_state, JumpState::Grounded);
    }

    #[test]
    fn test_free_fall_scenario() {
        // Player at (400, 0), velocity 0, no input
        let mut player = Player::at(400, 0);
        let mut expected_y = 0;
        let mut expected_v = 0;

        loop {
            expected_v += GRAVITY;
            expected_y += expected_v;
            let landed = integrate(&mut player, false) == Motion::Landed;

            if expected_y >= GROUND_LINE {
                assert!(landed);
                assert_eq!(player.y, GROUND_LINE);
                assert_eq!(player.velocity, 0);
                break;
            }

            assert!(!landed);
            assert_eq!(player.y, expected_y);
            assert_eq!(player.velocity, expected_v);
        }
    }

    #[test]
    fn test_grounded_clamps_to_ground_line() {
        let mut player = Player::at(100, GROUND_LINE + 7);
        player.velocity = 3;
        assert_eq!(integrate(&mut player, false), Motion::Resting);
        assert_eq!(player.y, GROUND_LINE);
        assert_eq!(player.velocity, 0);
    }

    #[test]
    fn test_supported_player_stays_put() {
        let mut player = Player::at(100, 290);
        assert_eq!(integrate(&mut player, true), Motion::Resting);
        assert_eq!(player.y, 290);
        assert_eq!(player.velocity, 0);
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut player = Player::at(2, GROUND_LINE);
        move_left(&mut player);
        assert_eq!(player.x, 0);
        move_left(&mut player);
        assert_eq!(player.x, 0);

        let mut player = Player::at(748, GROUND_LINE);
        move_right(&mut player);
        assert_eq!(player.x, 800 - PLAYER_SIZE);
    }

    #[test]
    fn test_move_down_at_ground_crushes() {
        let mut player = Player::spawn();
        assert_eq!(move_down(&mut player), DownOutcome::Crushed);
        assert_eq!(player.y, GROUND_LINE);
    }

    #[test]
    fn test_move_down_in_air_steps() {
        let mut player = Player::at(100, 200);
        assert_eq!(move_down(&mut player), DownOutcome::Moved);
        assert_eq!(player.y, 205);
    }

    proptest! {
        #[test]
        fn prop_x_stays_on_screen(start in 0i32..=750, moves in prop::collection::vec(any::<bool>(), 0..400)) {
            let mut player = Player::at(start, GROUND_LINE);
            for right in moves {
                if right { move_right(&mut player) } else { move_left(&mut player) }
                prop_assert!(player.x >= 0);
                prop_assert!(player.x <= player.max_x());
            }
        }

        #[test]
        fn prop_landing_resets_state(start_y in -500i32..GROUND_LINE, v in -30i32..30, double in any::<bool>()) {
            let mut player = Player::at(300, start_y);
            player.velocity = v;
            player.jump_state = if double { JumpState::DoubleJumping } else { JumpState::Jumping };

            for _ in 0..1000 {
                if integrate(&mut player, false) == Motion::Landed {
                    prop_assert_eq!(player.y, GROUND_LINE);
                    prop_assert_eq!(player.velocity, 0);
                    prop_assert_eq!(player.jump_state, JumpState::Grounded);
                    return Ok(());
                }
            }
            prop_assert!(false, "never landed");
        }
    }
}
