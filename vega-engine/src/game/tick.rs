//! Simulation Tick
//!
//! One tick = apply intents, integrate, resolve collisions. Drivers that own
//! presentation resources split the tick around a restart (see
//! `driver::game_loop`); everything else calls [`tick`].

#[cfg(feature = "debug-tracing")]
use tracing::trace_span;

use crate::game::collision::{self, CollisionOutcome};
use crate::game::events::{CrushCause, GameEvent, Surface};
use crate::game::input::{InputRecording, Intent};
use crate::game::physics::{self, DownOutcome, JumpOutcome, Motion};
use crate::game::state::World;

/// What the intents of a tick asked the driver to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntentOutcome {
    /// Leave the loop after this tick
    pub quit: bool,
    /// Restart requested while crushed
    pub restart: bool,
}

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Quit was requested this tick
    pub quit: bool,
    /// Player was respawned this tick
    pub restarted: bool,
}

/// Apply intents in order.
///
/// Quit is always honored. While crushed, every gameplay intent is dropped
/// and Restart is reported back instead of applied. Stepping down while
/// standing on a leaf starts a drop through it.
pub fn apply_intents(world: &mut World, intents: &[Intent]) -> IntentOutcome {
    let mut outcome = IntentOutcome::default();

    for intent in intents {
        if intent.is_gameplay() && world.is_crushed() {
            continue;
        }

        match intent {
            Intent::Quit => outcome.quit = true,
            Intent::Restart => {
                if world.is_crushed() {
                    outcome.restart = true;
                }
            }
            Intent::MoveLeft => physics::move_left(&mut world.player),
            Intent::MoveRight => physics::move_right(&mut world.player),
            Intent::MoveDown => {
                let on_leaf = collision::footing(&world.player, world.trees()).is_some();
                match physics::move_down(&mut world.player) {
                    DownOutcome::Crushed => world.crush(CrushCause::GroundTrigger),
                    DownOutcome::Moved if on_leaf => world.player.dropping = true,
                    DownOutcome::Moved => {}
                }
            }
            Intent::Jump => {
                let y = world.player.y;
                match physics::jump(&mut world.player) {
                    JumpOutcome::Jumped => world.push_event(GameEvent::jumped(world.tick, y)),
                    JumpOutcome::DoubleJumped => {
                        world.push_event(GameEvent::double_jumped(world.tick, y))
                    }
                    JumpOutcome::Ignored => {}
                }
            }
        }
    }

    outcome
}

/// Integrate and resolve collisions, then close the tick.
///
/// Runs whether or not the player is crushed.
pub fn advance(world: &mut World) -> TickResult {
    #[cfg(feature = "debug-tracing")]
    let _span = trace_span!("tick", tick = world.tick).entered();

    let supported = collision::footing(&world.player, world.trees()).is_some();
    let motion = physics::integrate(&mut world.player, supported);
    if motion == Motion::Landed {
        push_landing(world, Surface::Ground);
    }

    let trees = *world.trees();
    let outcome = collision::resolve(&mut world.player, &trees, motion);
    if world.player.dropping && !collision::overlaps_leaf(&world.player, &trees) {
        world.player.dropping = false;
    }

    match outcome {
        CollisionOutcome::Crushed { tree } => world.crush(CrushCause::Trunk { tree }),
        CollisionOutcome::LandedOnLeaf { tree, tier } => {
            push_landing(world, Surface::Leaf { tree, tier })
        }
        CollisionOutcome::LandedOnGround => push_landing(world, Surface::Ground),
        CollisionOutcome::Clear => {}
    }

    world.tick += 1;

    let mut events = world.take_events();
    events.sort();

    TickResult {
        events,
        ..TickResult::default()
    }
}

fn push_landing(world: &mut World, surface: Surface) {
    let event = GameEvent::landed(world.tick, surface, world.player.x, world.player.y);
    world.push_event(event);
}

/// Run one complete tick without presentation resources.
///
/// A honored restart respawns the player before integration.
pub fn tick(world: &mut World, intents: &[Intent]) -> TickResult {
    let outcome = apply_intents(world, intents);
    if outcome.restart {
        world.restart();
    }

    let mut result = advance(world);
    result.quit = outcome.quit;
    result.restarted = outcome.restart;
    result
}

/// Replay a recorded run on a fresh world.
///
/// Returns the final world and every event.
pub fn replay(recording: &InputRecording) -> (World, Vec<GameEvent>) {
    let mut world = World::new();
    let mut all_events = Vec::new();

    for (_, intents) in recording.replay_iter() {
        let result = tick(&mut world, intents);
        all_events.extend(result.events);
    }

    (world, all_events)
}
