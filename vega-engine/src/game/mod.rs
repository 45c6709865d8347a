//! Game Logic Module
//!
//! All simulation code. Integer-only and deterministic.
//!
//! ## Module Structure
//!
//! - `input`: Key events to intents, intent recording
//! - `state`: Player and world state
//! - `physics`: Jump state machine, horizontal steps, integration
//! - `collision`: Trunk and leaf collision resolution
//! - `map`: Fixed tree geometry
//! - `tick`: Per-tick update and replay
//! - `events`: Events reported by the simulation

pub mod input;
pub mod state;
pub mod physics;
pub mod collision;
pub mod map;
pub mod tick;
pub mod events;

// Re-export key types
pub use input::{InputEvent, InputRecording, Intent, Key};
pub use state::{JumpState, Player, World};
pub use tick::{IntentOutcome, TickResult};
pub use events::GameEvent;
