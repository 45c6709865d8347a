//! Game State Definitions
//!
//! Player and world state for the simulation. Jump bookkeeping lives on the
//! player, so every update takes the state it mutates explicitly.

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, compute_state_hash};
use crate::core::rect::Rect;
use crate::game::events::{CrushCause, GameEvent};
use crate::game::map::{forest, Tree};
use crate::{GROUND_LINE, PLAYER_SIZE, SCREEN_WIDTH};

// =============================================================================
// JUMP STATE
// =============================================================================

/// Jump state machine.
///
/// ```text
/// Grounded --jump--> Jumping --jump--> DoubleJumping
///    ^                  |                   |
///    +------ landing (velocity >= 0) -------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum JumpState {
    /// On the ground line or a leaf (or free-falling without having jumped)
    #[default]
    Grounded = 0,
    /// First jump used
    Jumping = 1,
    /// Both jumps used
    DoubleJumping = 2,
}

impl JumpState {
    /// Check if a jump impulse is driving the player.
    #[inline]
    pub fn is_airborne(self) -> bool {
        self != JumpState::Grounded
    }
}

// =============================================================================
// PLAYER
// =============================================================================

/// The stick figure's collision box and motion state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge (pixels)
    pub x: i32,

    /// Top edge (pixels)
    pub y: i32,

    /// Collision box width
    pub width: i32,

    /// Collision box height
    pub height: i32,

    /// Vertical velocity (pixels/tick, positive = down)
    pub velocity: i32,

    /// Jump state machine
    pub jump_state: JumpState,

    /// Crushed this life; gameplay input is frozen until restart
    pub crushed: bool,

    /// Stepped down off a leaf; leaves do not catch until the player is
    /// clear of every tier or lands on the ground
    pub dropping: bool,
}

impl Player {
    /// Spawn x: horizontally centred.
    pub const SPAWN_X: i32 = SCREEN_WIDTH / 2 - PLAYER_SIZE / 2;

    /// Create a player at the spawn point, standing on the ground.
    pub fn spawn() -> Self {
        Self::at(Self::SPAWN_X, GROUND_LINE)
    }

    /// Create a resting player at an arbitrary position.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            velocity: 0,
            jump_state: JumpState::Grounded,
            crushed: false,
            dropping: false,
        }
    }

    /// Collision rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Largest x that keeps the player on screen.
    #[inline]
    pub fn max_x(&self) -> i32 {
        SCREEN_WIDTH - self.width
    }

    /// Stop all vertical motion and reset the jump state machine.
    #[inline]
    pub fn land(&mut self) {
        self.velocity = 0;
        self.jump_state = JumpState::Grounded;
        self.dropping = false;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

// =============================================================================
// WORLD
// =============================================================================

/// Complete simulation state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    /// Completed ticks
    pub tick: u32,

    /// The player
    pub player: Player,

    /// Times the player has been crushed
    pub deaths: u32,

    /// Fixed trees (immutable)
    trees: [Tree; 3],

    /// Events pending for the current tick
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl World {
    /// Create a new world with the player at the spawn point.
    pub fn new() -> Self {
        Self::with_player(Player::spawn())
    }

    /// Create a world around a prepared player.
    pub fn with_player(player: Player) -> Self {
        Self {
            tick: 0,
            player,
            deaths: 0,
            trees: forest(),
            events: Vec::with_capacity(8),
        }
    }

    /// The trees, left to right.
    pub fn trees(&self) -> &[Tree; 3] {
        &self.trees
    }

    /// Check if the current life has ended.
    #[inline]
    pub fn is_crushed(&self) -> bool {
        self.player.crushed
    }

    /// Mark the player crushed.
    ///
    /// Only the transition is reported; repeated hits on a crushed player
    /// are silent.
    pub fn crush(&mut self, cause: CrushCause) {
        if self.player.crushed {
            return;
        }

        self.player.crushed = true;
        self.deaths += 1;
        self.push_event(GameEvent::crushed(self.tick, cause));
    }

    /// Respawn the player and clear the crushed flag.
    pub fn restart(&mut self) {
        self.player = Player::spawn();
        self.push_event(GameEvent::restarted(self.tick, self.deaths));
    }

    /// Compute state hash for replay verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, |hasher| {
            let p = &self.player;
            hasher.update_rect(p.rect());
            hasher.update_i32(p.velocity);
            hasher.update_u8(p.jump_state as u8);
            hasher.update_bool(p.crushed);
            hasher.update_bool(p.dropping);
            hasher.update_u32(self.deaths);
        })
    }

    /// Take all pending events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Push an event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
