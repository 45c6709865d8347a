//! # VEGA Engine
//!
//! Deterministic simulation and loop driver for a single-screen platformer demo:
//! a stick figure that walks, jumps and double-jumps between three trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        VEGA ENGINE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rect.rs     - Integer points and rectangles             │
//! │  └── hash.rs     - State hashing for replay verification     │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── input.rs    - Key events -> intents, recording          │
//! │  ├── state.rs    - Player and world state                    │
//! │  ├── physics.rs  - Jump state machine and integration        │
//! │  ├── collision.rs- Trunk / leaf collision resolution         │
//! │  ├── map.rs      - Fixed tree geometry                       │
//! │  ├── tick.rs     - Per-tick update and replay                │
//! │  └── events.rs   - Events reported by the simulation         │
//! │                                                              │
//! │  render/         - Draw-list composition (no pixels)         │
//! │  driver/         - Frame clock, backend boundary, game loop  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fixed-step simulation
//!
//! The simulation advances by one fixed step per rendered frame. There is no
//! delta-time scaling: simulation speed is tied to the achieved frame rate,
//! capped at [`FPS_CAP`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod driver;
pub mod error;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use core::rect::{Point, Rect};
pub use driver::{
    Backend, BackendError, FrameClock, GameLoop, LoopConfig, LoopSummary, Script, ScriptedBackend,
};
pub use error::VegaError;
pub use game::input::{InputEvent, Intent, Key};
pub use game::state::{JumpState, Player, World};
pub use render::{Color, DrawCommand, Frame};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title used by windowed backends.
pub const WINDOW_TITLE: &str = "VEGA¹⁶ Engine";

/// Screen width in pixels.
pub const SCREEN_WIDTH: i32 = 800;

/// Screen height in pixels.
pub const SCREEN_HEIGHT: i32 = 690;

/// Player rectangle width and height.
pub const PLAYER_SIZE: i32 = 50;

/// Player top edge when standing on the ground.
pub const GROUND_LINE: i32 = SCREEN_HEIGHT - PLAYER_SIZE - 90;

/// Frame rate cap (Hz). One simulation tick per frame.
pub const FPS_CAP: u32 = 60;
