//! Game Loop
//!
//! poll -> map -> record -> update -> render -> present -> pace, once per
//! frame, until a quit intent arrives.

use std::time::Instant;

use tracing::{debug, info};

use crate::core::hash::StateHash;
use crate::driver::backend::Backend;
use crate::driver::clock::FrameClock;
use crate::error::VegaError;
use crate::game::events::{GameEvent, GameEventData};
use crate::game::input::{map_events, InputRecording};
use crate::game::state::World;
use crate::game::tick::{advance, apply_intents};
use crate::render::compose;
use crate::FPS_CAP;

/// Loop configuration.
#[derive(Clone, Debug)]
pub struct LoopConfig {
    /// Frame rate cap
    pub fps_cap: u32,
    /// Stop after this many frames even without a quit
    pub max_frames: Option<u64>,
    /// Sleep out each frame's budget. Off for scripted runs.
    pub pace: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fps_cap: FPS_CAP,
            max_frames: None,
            pace: true,
        }
    }
}

/// Outcome of a finished loop.
#[derive(Clone, Debug)]
pub struct LoopSummary {
    /// Simulation ticks run
    pub ticks: u32,
    /// Crushes over the whole run
    pub deaths: u32,
    /// Hash of the final world
    pub final_hash: StateHash,
    /// Every intent the loop applied
    pub recording: InputRecording,
}

/// Drives a [`World`] with a presentation [`Backend`].
pub struct GameLoop<B: Backend> {
    backend: B,
    world: World,
    clock: FrameClock,
    recording: InputRecording,
    config: LoopConfig,
}

impl<B: Backend> GameLoop<B> {
    /// Create a loop around an acquired backend.
    pub fn new(backend: B, config: LoopConfig) -> Self {
        Self {
            backend,
            world: World::new(),
            clock: FrameClock::new(config.fps_cap, Instant::now()),
            recording: InputRecording::new(),
            config,
        }
    }

    /// Current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run until quit (or `max_frames`).
    ///
    /// A failed present or a failed reacquire on restart ends the run.
    pub fn run(&mut self) -> Result<LoopSummary, VegaError> {
        info!(
            "Loop started (fps cap {}, frame budget {:?})",
            self.config.fps_cap,
            self.clock.frame_budget()
        );

        loop {
            let frame_start = Instant::now();

            let quit = self.step()?;

            if let Some(fps) = self.clock.record_frame(Instant::now()) {
                info!("FPS: {}", fps);
            }

            if quit {
                info!("Quit requested at tick {}", self.world.tick);
                break;
            }
            if let Some(max) = self.config.max_frames {
                if self.clock.ticks() >= max {
                    info!("Frame limit {} reached", max);
                    break;
                }
            }

            if self.config.pace {
                self.clock.pace(frame_start);
            }
        }

        self.recording.finalize(self.world.tick);

        let final_hash = self.world.compute_hash();
        info!(
            "Loop finished: {} ticks, {} deaths, state {}",
            self.world.tick,
            self.world.deaths,
            hex::encode(&final_hash[..8])
        );

        Ok(LoopSummary {
            ticks: self.world.tick,
            deaths: self.world.deaths,
            final_hash,
            recording: self.recording.clone(),
        })
    }

    /// One frame. Returns whether a quit was requested.
    fn step(&mut self) -> Result<bool, VegaError> {
        let events = self.backend.poll_events();
        let intents = map_events(&events);
        self.recording.record(self.world.tick, &intents);

        let outcome = apply_intents(&mut self.world, &intents);
        if outcome.restart {
            // Resources go first; the world only respawns once they are back.
            self.backend
                .reacquire()
                .map_err(VegaError::RestartFailed)?;
            self.world.restart();
        }

        let result = advance(&mut self.world);
        for event in &result.events {
            self.log_event(event);
        }

        let frame = compose(&self.world);
        self.backend.present(&frame).map_err(VegaError::Present)?;

        Ok(outcome.quit)
    }

    fn log_event(&self, event: &GameEvent) {
        if event.is_crush() || matches!(event.data, GameEventData::Restarted { .. }) {
            let hash = self.world.compute_hash();
            info!(
                "tick {}: {:?} (state {})",
                event.tick,
                event.data,
                hex::encode(&hash[..8])
            );
        } else {
            debug!("tick {}: {:?}", event.tick, event.data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::backend::BackendError;
    use crate::driver::headless::{Script, ScriptedBackend};
    use crate::game::input::Key;
    use crate::game::tick::replay;
    use crate::render::CRUSHED_MESSAGE;

    fn scripted(script: Script) -> GameLoop<ScriptedBackend> {
        let backend = ScriptedBackend::acquire(script).unwrap();
        GameLoop::new(
            backend,
            LoopConfig {
                pace: false,
                ..LoopConfig::default()
            },
        )
    }

    #[test]
    fn test_quit_ends_loop() {
        let mut game = scripted(Script::new().idle(5).quit());
        let summary = game.run().unwrap();

        assert_eq!(summary.ticks, 6);
        assert_eq!(game.backend().frames_presented(), 6);
        assert_eq!(summary.deaths, 0);
    }

    #[test]
    fn test_max_frames() {
        let mut game = GameLoop::new(
            ScriptedBackend::acquire(Script::new().idle(100)).unwrap(),
            LoopConfig {
                max_frames: Some(10),
                pace: false,
                ..LoopConfig::default()
            },
        );
        let summary = game.run().unwrap();
        assert_eq!(summary.ticks, 10);
    }

    #[test]
    fn test_crush_then_restart_reacquires() {
        // Spawn x 375; the trunk of tree 2 starts at 550, reached on step 26.
        let script = Script::new()
            .hold(Key::D, 30)
            .idle(2)
            .tap(Key::Enter)
            .idle(2)
            .quit();
        let mut game = scripted(script);
        let summary = game.run().unwrap();

        assert_eq!(summary.deaths, 1);
        assert!(!game.world().is_crushed());
        assert_eq!(game.backend().acquisitions(), 2);
        assert_eq!(game.world().player.x, crate::game::state::Player::SPAWN_X);
    }

    #[test]
    fn test_crushed_frame_has_messages() {
        let script = Script::new().hold(Key::D, 30).idle(1);
        let mut game = GameLoop::new(
            ScriptedBackend::acquire(script).unwrap(),
            LoopConfig {
                max_frames: Some(31),
                pace: false,
                ..LoopConfig::default()
            },
        );
        game.run().unwrap();

        let frame = game.backend().last_frame().unwrap();
        assert!(frame.texts().any(|t| t == CRUSHED_MESSAGE));
    }

    #[test]
    fn test_failed_reacquire_is_fatal() {
        let script = Script::new().hold(Key::D, 30).tap(Key::Enter).quit();
        let backend = ScriptedBackend::acquire(script).unwrap().fail_reacquire();
        let mut game = GameLoop::new(
            backend,
            LoopConfig {
                pace: false,
                ..LoopConfig::default()
            },
        );

        let err = game.run().unwrap_err();
        assert!(matches!(
            err,
            VegaError::RestartFailed(BackendError::Acquire { .. })
        ));
        // Failed restart leaves the world crushed.
        assert!(game.world().is_crushed());
    }

    #[test]
    fn test_recording_replays_to_same_state() {
        let script = Script::new()
            .hold(Key::D, 20)
            .tap(Key::W)
            .idle(3)
            .tap(Key::Up)
            .idle(60)
            .hold(Key::A, 10)
            .quit();
        let mut game = scripted(script);
        let summary = game.run().unwrap();

        let (replayed, _) = replay(&summary.recording);
        assert_eq!(replayed.tick, summary.ticks);
        assert_eq!(replayed.compute_hash(), summary.final_hash);
    }
}
