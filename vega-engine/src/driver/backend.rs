//! Presentation Backend Boundary
//!
//! The loop calls into a backend for input and output only. Window, drawing
//! context and font live behind it, acquired when the backend is built.

use crate::game::input::InputEvent;
use crate::render::Frame;

/// Backend failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Window or drawing context could not be created.
    #[error("could not create {what}: {reason}")]
    Acquire {
        /// Resource name
        what: &'static str,
        /// Backend diagnostic
        reason: String,
    },

    /// Frame could not be drawn.
    #[error("draw failed: {0}")]
    Draw(String),

    /// Resources are not currently held.
    #[error("presentation resources released")]
    Released,
}

/// A presentation backend.
pub trait Backend {
    /// Drain every pending input event, oldest first.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Draw a frame and show it.
    fn present(&mut self, frame: &Frame) -> Result<(), BackendError>;

    /// Release every presentation resource and acquire it again.
    fn reacquire(&mut self) -> Result<(), BackendError>;
}
