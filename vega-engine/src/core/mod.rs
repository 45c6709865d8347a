//! Core deterministic primitives.
//!
//! Integer-only geometry and hashing shared by the simulation and the
//! render pipeline.

pub mod rect;
pub mod hash;

// Re-export core types
pub use rect::{Point, Rect};
pub use hash::{compute_state_hash, StateHash, StateHasher};
