//! Loop Driver Module
//!
//! Everything that touches wall-clock time or presentation resources. The
//! simulation in `game/` never does.
//!
//! - `clock`: Frame budget, FPS counter
//! - `backend`: Presentation backend boundary
//! - `headless`: Scripted backend for demos and tests
//! - `game_loop`: poll -> update -> render -> pace

pub mod backend;
pub mod clock;
pub mod game_loop;
pub mod headless;

pub use backend::{Backend, BackendError};
pub use clock::FrameClock;
pub use game_loop::{GameLoop, LoopConfig, LoopSummary};
pub use headless::{Script, ScriptedBackend};
