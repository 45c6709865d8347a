//! State Hashing for Verification
//!
//! Provides deterministic hashing of simulation state for:
//! - Replay validation (recorded run vs. replayed run)
//! - Log fingerprints when a life ends

use sha2::{Sha256, Digest};
use super::rect::Rect;

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Deterministic hasher for simulation state.
///
/// Wraps SHA-256 with helpers for the geometry types.
/// Order of updates is critical for determinism.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for world state.
    pub fn for_world_state() -> Self {
        Self::new(b"VEGA_WORLD_STATE_V1")
    }

    /// Create hasher for an input recording.
    pub fn for_recording() -> Self {
        Self::new(b"VEGA_RECORDING_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with a rectangle.
    #[inline]
    pub fn update_rect(&mut self, value: Rect) {
        self.update_i32(value.x);
        self.update_i32(value.y);
        self.update_i32(value.w);
        self.update_i32(value.h);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute state hash for replay verification.
///
/// Called by `World::compute_hash()`. The closure adds state-specific data
/// after the tick.
pub fn compute_state_hash<F>(tick: u32, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_world_state();

    // Always hash tick first
    hasher.update_u32(tick);

    add_state(&mut hasher);

    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_determinism() {
        let a = compute_state_hash(7, |h| h.update_rect(Rect::new(1, 2, 3, 4)));
        let b = compute_state_hash(7, |h| h.update_rect(Rect::new(1, 2, 3, 4)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_sensitivity() {
        let a = compute_state_hash(7, |h| h.update_rect(Rect::new(1, 2, 3, 4)));
        let b = compute_state_hash(8, |h| h.update_rect(Rect::new(1, 2, 3, 4)));
        let c = compute_state_hash(7, |h| h.update_rect(Rect::new(2, 1, 3, 4)));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_domain_separation() {
        let mut world = StateHasher::for_world_state();
        let mut recording = StateHasher::for_recording();
        world.update_u32(42);
        recording.update_u32(42);
        assert_ne!(world.finalize(), recording.finalize());
    }
}
