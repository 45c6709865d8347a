//! Render Pipeline
//!
//! Turns the world into a backend-neutral draw list. Backends own the pixels;
//! this module only decides what gets drawn, in which order and colour.

mod scene;

pub use scene::{compose, Color, DrawCommand, Frame, CRUSHED_MESSAGE, RESTART_MESSAGE};
