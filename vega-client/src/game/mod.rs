//! Game module - simulation resources and the per-frame pipeline
//!
//! Frame order:
//! - First: note the frame start
//! - Update: collect input -> step simulation -> draw
//! - Last: count the frame, sleep out the budget

use std::time::Instant;

use bevy::app::AppExit;
use bevy::prelude::*;

use vega::game::events::{GameEvent, GameEventData};
use vega::game::input::{map_events, InputRecording};
use vega::game::tick::{advance, apply_intents};
use vega::{FrameClock, InputEvent, World, FPS_CAP};

use crate::{spawn_camera, Presentation};

pub mod draw;
pub mod input;

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<Simulation>()
            .init_resource::<PendingInput>()
            .insert_resource(FramePacer::new())

            .add_systems(First, begin_frame)
            .add_systems(Update, (
                input::collect_input,
                step_simulation,
                draw::draw_scene,
            ).chain())
            .add_systems(Last, pace_frame);
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

/// The simulated world and everything applied to it.
#[derive(Resource, Default)]
pub struct Simulation {
    pub world: World,
    pub recording: InputRecording,
}

/// Input events collected this frame, in arrival order.
#[derive(Resource, Default)]
pub struct PendingInput(pub Vec<InputEvent>);

/// Frame budget and FPS counter.
#[derive(Resource)]
pub struct FramePacer {
    clock: FrameClock,
    frame_start: Instant,
}

impl FramePacer {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            clock: FrameClock::new(FPS_CAP, now),
            frame_start: now,
        }
    }
}

// ============================================================================
// SYSTEMS
// ============================================================================

fn begin_frame(mut pacer: ResMut<FramePacer>) {
    pacer.frame_start = Instant::now();
}

/// Apply this frame's intents and advance one tick.
///
/// A restart releases and respawns the camera before the world respawns.
fn step_simulation(
    mut commands: Commands,
    mut sim: ResMut<Simulation>,
    mut pending: ResMut<PendingInput>,
    presentation: Query<Entity, With<Presentation>>,
    mut exit: EventWriter<AppExit>,
) {
    let events = std::mem::take(&mut pending.0);
    let intents = map_events(&events);

    let sim = &mut *sim;
    sim.recording.record(sim.world.tick, &intents);

    let outcome = apply_intents(&mut sim.world, &intents);
    if outcome.restart {
        for entity in presentation.iter() {
            commands.entity(entity).despawn_recursive();
        }
        spawn_camera(&mut commands);
        sim.world.restart();
    }

    let result = advance(&mut sim.world);
    for event in &result.events {
        log_event(&sim.world, event);
    }

    if outcome.quit {
        sim.recording.finalize(sim.world.tick);
        info!(
            "Quit at tick {} ({} deaths), state {}, recording {}",
            sim.world.tick,
            sim.world.deaths,
            hex::encode(&sim.world.compute_hash()[..8]),
            hex::encode(&sim.recording.compute_hash()[..8])
        );
        exit.send(AppExit::Success);
    }
}

fn log_event(world: &World, event: &GameEvent) {
    match event.data {
        GameEventData::Crushed { .. } | GameEventData::Restarted { .. } => {
            info!(
                "tick {}: {:?} (state {})",
                event.tick,
                event.data,
                hex::encode(&world.compute_hash()[..8])
            );
        }
        _ => debug!("tick {}: {:?}", event.tick, event.data),
    }
}

fn pace_frame(mut pacer: ResMut<FramePacer>) {
    if let Some(fps) = pacer.clock.record_frame(Instant::now()) {
        info!("FPS: {}", fps);
    }
    pacer.clock.pace(pacer.frame_start);
}
