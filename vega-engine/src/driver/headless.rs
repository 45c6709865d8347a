//! Scripted Headless Backend
//!
//! Replays a per-tick input script and keeps presentation statistics instead
//! of pixels. Used by the demo binary and the loop tests.

use std::collections::VecDeque;

use tracing::debug;

use crate::driver::backend::{Backend, BackendError};
use crate::game::input::{InputEvent, Key};
use crate::render::Frame;

/// Per-tick input script builder.
#[derive(Clone, Debug, Default)]
pub struct Script {
    ticks: Vec<Vec<InputEvent>>,
}

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks without input.
    pub fn idle(mut self, ticks: usize) -> Self {
        self.ticks.extend((0..ticks).map(|_| Vec::new()));
        self
    }

    /// Hold a key: one key-down per tick, like keyboard auto-repeat.
    pub fn hold(mut self, key: Key, ticks: usize) -> Self {
        self.ticks
            .extend((0..ticks).map(|_| vec![InputEvent::KeyDown(key)]));
        self
    }

    /// Press a key once.
    pub fn tap(self, key: Key) -> Self {
        self.chord(&[key])
    }

    /// Several key-downs delivered in the same poll.
    pub fn chord(mut self, keys: &[Key]) -> Self {
        self.ticks
            .push(keys.iter().map(|k| InputEvent::KeyDown(*k)).collect());
        self
    }

    /// Close the window.
    pub fn quit(mut self) -> Self {
        self.ticks.push(vec![InputEvent::Quit]);
        self
    }

    /// Number of scripted ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Check if nothing is scripted.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Backend that plays a script and records what it was asked to draw.
///
/// When the script runs out it reports `Quit`.
#[derive(Debug)]
pub struct ScriptedBackend {
    script: VecDeque<Vec<InputEvent>>,
    acquired: bool,
    acquisitions: u32,
    frames_presented: u64,
    last_frame: Option<Frame>,
    fail_reacquire: bool,
}

impl ScriptedBackend {
    /// Acquire the (virtual) presentation resources.
    pub fn acquire(script: Script) -> Result<Self, BackendError> {
        debug!("Scripted backend acquired ({} ticks)", script.len());
        Ok(Self {
            script: script.ticks.into(),
            acquired: true,
            acquisitions: 1,
            frames_presented: 0,
            last_frame: None,
            fail_reacquire: false,
        })
    }

    /// Make every later reacquisition fail.
    pub fn fail_reacquire(mut self) -> Self {
        self.fail_reacquire = true;
        self
    }

    /// Frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Times resources were acquired, the initial acquisition included.
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions
    }

    /// Check if resources are currently held.
    pub fn is_acquired(&self) -> bool {
        self.acquired
    }
}

impl Backend for ScriptedBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }

    fn present(&mut self, frame: &Frame) -> Result<(), BackendError> {
        if !self.acquired {
            return Err(BackendError::Released);
        }

        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn reacquire(&mut self) -> Result<(), BackendError> {
        self.acquired = false;

        if self.fail_reacquire {
            return Err(BackendError::Acquire {
                what: "window",
                reason: "scripted failure".to_string(),
            });
        }

        self.acquired = true;
        self.acquisitions += 1;
        debug!("Scripted backend reacquired (#{})", self.acquisitions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_builder() {
        let script = Script::new()
            .idle(2)
            .hold(Key::D, 3)
            .chord(&[Key::W, Key::W])
            .quit();
        assert_eq!(script.len(), 7);

        let mut backend = ScriptedBackend::acquire(script).unwrap();
        assert!(backend.poll_events().is_empty());
        assert!(backend.poll_events().is_empty());
        assert_eq!(backend.poll_events(), vec![InputEvent::KeyDown(Key::D)]);
        backend.poll_events();
        backend.poll_events();
        assert_eq!(
            backend.poll_events(),
            vec![InputEvent::KeyDown(Key::W), InputEvent::KeyDown(Key::W)]
        );
        assert_eq!(backend.poll_events(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_exhausted_script_quits() {
        let mut backend = ScriptedBackend::acquire(Script::new()).unwrap();
        assert_eq!(backend.poll_events(), vec![InputEvent::Quit]);
        assert_eq!(backend.poll_events(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_reacquire() {
        let mut backend = ScriptedBackend::acquire(Script::new()).unwrap();
        backend.reacquire().unwrap();
        assert_eq!(backend.acquisitions(), 2);
        assert!(backend.is_acquired());
    }

    #[test]
    fn test_failed_reacquire_leaves_resources_released() {
        let mut backend = ScriptedBackend::acquire(Script::new())
            .unwrap()
            .fail_reacquire();

        assert!(backend.reacquire().is_err());
        assert!(!backend.is_acquired());
        assert_eq!(backend.present(&Frame::default()), Err(BackendError::Released));
    }
}
