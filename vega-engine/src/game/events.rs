//! Game Events
//!
//! Events generated during simulation for logging, replay checks and tests.

use crate::game::map::LeafTier;

/// Priority for event ordering within a tick.
///
/// Lower value = reported first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum EventPriority {
    /// Deaths first
    Crush = 0,
    /// Then landings
    Landing = 1,
    /// Then jump impulses
    Jump = 2,
    /// Lowest priority
    Other = 255,
}

/// Where a fall ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// The ground line
    Ground,
    /// A leaf tier of a tree
    Leaf {
        /// Tree index
        tree: u8,
        /// Tier landed on
        tier: LeafTier,
    },
}

/// What crushed the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrushCause {
    /// Touched a trunk
    Trunk {
        /// Tree index
        tree: u8,
    },
    /// Pressed down while standing in the ground trigger zone
    GroundTrigger,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEventData {
    /// Jump from a grounded state
    Jumped {
        /// Player top edge at take-off
        y: i32,
    },

    /// Second impulse while airborne
    DoubleJumped {
        /// Player top edge at take-off
        y: i32,
    },

    /// Fall ended on a surface
    Landed {
        /// Surface landed on
        surface: Surface,
        /// Player left edge
        x: i32,
        /// Player top edge after the snap
        y: i32,
    },

    /// Player was crushed; gameplay input is frozen
    Crushed {
        /// Cause of death
        cause: CrushCause,
    },

    /// Player respawned after being crushed
    Restarted {
        /// Deaths so far in this process
        deaths: u32,
    },
}

/// A game event with timing and priority.
#[derive(Clone, Debug)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Ordering priority
    pub priority: EventPriority,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u32, priority: EventPriority, data: GameEventData) -> Self {
        Self { tick, priority, data }
    }

    /// Create jumped event.
    pub fn jumped(tick: u32, y: i32) -> Self {
        Self::new(tick, EventPriority::Jump, GameEventData::Jumped { y })
    }

    /// Create double-jumped event.
    pub fn double_jumped(tick: u32, y: i32) -> Self {
        Self::new(tick, EventPriority::Jump, GameEventData::DoubleJumped { y })
    }

    /// Create landed event.
    pub fn landed(tick: u32, surface: Surface, x: i32, y: i32) -> Self {
        Self::new(
            tick,
            EventPriority::Landing,
            GameEventData::Landed { surface, x, y },
        )
    }

    /// Create crushed event.
    pub fn crushed(tick: u32, cause: CrushCause) -> Self {
        Self::new(tick, EventPriority::Crush, GameEventData::Crushed { cause })
    }

    /// Create restarted event.
    pub fn restarted(tick: u32, deaths: u32) -> Self {
        Self::new(tick, EventPriority::Other, GameEventData::Restarted { deaths })
    }

    /// Check if this is a crush event.
    pub fn is_crush(&self) -> bool {
        matches!(self.data, GameEventData::Crushed { .. })
    }
}

impl PartialEq for GameEvent {
    fn eq(&self, other: &Self) -> bool {
        self.tick == other.tick && self.priority == other.priority
    }
}

impl Eq for GameEvent {}

impl PartialOrd for GameEvent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GameEvent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by tick, then priority
        self.tick
            .cmp(&other.tick)
            .then(self.priority.cmp(&other.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ordering() {
        let crush = GameEvent::crushed(10, CrushCause::Trunk { tree: 1 });
        let land = GameEvent::landed(10, Surface::Ground, 375, 550);
        let jump = GameEvent::jumped(9, 550);

        // Same tick, crush before landing
        assert!(crush < land);

        // Earlier tick first regardless of priority
        assert!(jump < crush);
    }

    #[test]
    fn test_is_crush() {
        assert!(GameEvent::crushed(1, CrushCause::GroundTrigger).is_crush());
        assert!(!GameEvent::restarted(1, 1).is_crush());
    }
}
