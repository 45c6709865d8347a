//! Input Mapping and Recording
//!
//! Translates raw key-down events from a presentation backend into movement
//! and jump intents. Pure translation: state changes happen in `tick`.
//!
//! Also records the intents of every tick so a run can be replayed.

use serde::{Serialize, Deserialize};
use crate::core::hash::{StateHash, StateHasher};

// =============================================================================
// RAW INPUT
// =============================================================================

/// Backend-independent key identity.
///
/// Backends translate their own key codes into this set; anything the game
/// does not react to becomes `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// W
    W,
    /// A
    A,
    /// S
    S,
    /// D
    D,
    /// Up arrow
    Up,
    /// Left arrow
    Left,
    /// Down arrow
    Down,
    /// Right arrow
    Right,
    /// Space bar
    Space,
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Any other key
    Other,
}

/// A discrete event polled from the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down (auto-repeat included)
    KeyDown(Key),
    /// The window asked to close
    Quit,
}

// =============================================================================
// INTENTS
// =============================================================================

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Intent {
    /// Step left
    MoveLeft = 0,
    /// Step right
    MoveRight = 1,
    /// Step down (or get crushed at the ground trigger)
    MoveDown = 2,
    /// Jump / double jump
    Jump = 3,
    /// Restart after being crushed
    Restart = 4,
    /// Leave the loop
    Quit = 5,
}

impl Intent {
    /// Check if this intent moves the player (suspended while crushed).
    #[inline]
    pub fn is_gameplay(self) -> bool {
        matches!(
            self,
            Intent::MoveLeft | Intent::MoveRight | Intent::MoveDown | Intent::Jump
        )
    }
}

/// Map a single event to an intent.
pub fn map_event(event: &InputEvent) -> Option<Intent> {
    match event {
        InputEvent::Quit => Some(Intent::Quit),
        InputEvent::KeyDown(key) => match key {
            Key::W | Key::Up | Key::Space => Some(Intent::Jump),
            Key::A | Key::Left => Some(Intent::MoveLeft),
            Key::D | Key::Right => Some(Intent::MoveRight),
            Key::S | Key::Down => Some(Intent::MoveDown),
            Key::Enter => Some(Intent::Restart),
            Key::Escape => Some(Intent::Quit),
            Key::Other => None,
        },
    }
}

/// Map a drained event queue to intents, preserving order.
pub fn map_events(events: &[InputEvent]) -> Vec<Intent> {
    events.iter().filter_map(map_event).collect()
}

// =============================================================================
// RECORDING
// =============================================================================

/// Intents applied during one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickIntents {
    /// Tick index (0-based)
    pub tick: u32,
    /// Intents in event order
    pub intents: Vec<Intent>,
}

/// Intent recording for one run.
///
/// Only ticks that had intents are stored. Most ticks of a run are idle, so
/// this stays small.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputRecording {
    /// Number of ticks covered by the recording
    pub tick_count: u32,

    /// Sparse entries, strictly increasing by tick.
    entries: Vec<TickIntents>,
}

impl InputRecording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the intents of a tick.
    ///
    /// Ticks must be recorded in increasing order. Empty intent lists only
    /// extend the covered tick range.
    pub fn record(&mut self, tick: u32, intents: &[Intent]) {
        self.tick_count = self.tick_count.max(tick + 1);

        if intents.is_empty() {
            return;
        }

        match self.entries.last_mut() {
            Some(last) if last.tick == tick => last.intents.extend_from_slice(intents),
            _ => self.entries.push(TickIntents {
                tick,
                intents: intents.to_vec(),
            }),
        }
    }

    /// Get the intents of a specific tick.
    ///
    /// Uses binary search.
    pub fn intents_at(&self, tick: u32) -> &[Intent] {
        match self.entries.binary_search_by_key(&tick, |e| e.tick) {
            Ok(idx) => &self.entries[idx].intents,
            Err(_) => NO_INTENTS,
        }
    }

    /// Number of stored (non-idle) ticks.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Finalize the recording (call when the loop ends).
    pub fn finalize(&mut self, tick_count: u32) {
        self.tick_count = self.tick_count.max(tick_count);
    }

    /// Fingerprint of the recorded intents.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_recording();
        hasher.update_u32(self.tick_count);
        for entry in &self.entries {
            hasher.update_u32(entry.tick);
            hasher.update_u32(entry.intents.len() as u32);
            for intent in &entry.intents {
                hasher.update_u8(*intent as u8);
            }
        }
        hasher.finalize()
    }

    /// Create iterator over every tick for replay.
    pub fn replay_iter(&self) -> ReplayIterator<'_> {
        ReplayIterator {
            recording: self,
            current_tick: 0,
        }
    }
}

const NO_INTENTS: &[Intent] = &[];

/// Iterator for replaying intents tick-by-tick, idle ticks included.
pub struct ReplayIterator<'a> {
    recording: &'a InputRecording,
    current_tick: u32,
}

impl<'a> Iterator for ReplayIterator<'a> {
    type Item = (u32, &'a [Intent]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_tick >= self.recording.tick_count {
            return None;
        }

        let tick = self.current_tick;
        self.current_tick += 1;

        Some((tick, self.recording.intents_at(tick)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
