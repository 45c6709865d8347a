//! Frame Clock
//!
//! Fixed frame budget derived from the FPS cap, plus a once-per-second FPS
//! counter. Instants are passed in by the caller.

use std::thread;
use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Frame pacing and FPS bookkeeping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_budget: Duration,
    ticks: u64,
    frames_this_second: u32,
    fps: u32,
    last_report: Instant,
}

impl FrameClock {
    /// Create a clock for an FPS cap.
    ///
    /// The budget is whole milliseconds (`1000 / fps_cap`), so a 60 Hz cap
    /// gives 16 ms frames.
    pub fn new(fps_cap: u32, now: Instant) -> Self {
        let fps_cap = fps_cap.max(1);
        Self {
            frame_budget: Duration::from_millis(1000 / fps_cap as u64),
            ticks: 0,
            frames_this_second: 0,
            fps: 0,
            last_report: now,
        }
    }

    /// Target duration of one frame.
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Frames completed since the clock started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// FPS measured over the last full second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Count a finished frame.
    ///
    /// Returns the new FPS figure once per elapsed second.
    pub fn record_frame(&mut self, now: Instant) -> Option<u32> {
        self.ticks += 1;
        self.frames_this_second += 1;

        if now.saturating_duration_since(self.last_report) < REPORT_INTERVAL {
            return None;
        }

        self.fps = self.frames_this_second;
        self.frames_this_second = 0;
        self.last_report = now;
        Some(self.fps)
    }

    /// Time left in the budget of a frame that started at `frame_start`.
    ///
    /// `None` when the frame used its whole budget or overran it; overruns
    /// are not made up later.
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(frame_start);
        self.frame_budget
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Sleep out the rest of the frame budget.
    pub fn pace(&self, frame_start: Instant) {
        if let Some(left) = self.remaining(frame_start, Instant::now()) {
            thread::sleep(left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        let clock = FrameClock::new(60, Instant::now());
        assert_eq!(clock.frame_budget(), Duration::from_millis(16));

        let clock = FrameClock::new(0, Instant::now());
        assert_eq!(clock.frame_budget(), Duration::from_millis(1000));
    }

    #[test]
    fn test_remaining_when_early() {
        let start = Instant::now();
        let clock = FrameClock::new(60, start);
        let left = clock.remaining(start, start + Duration::from_millis(4));
        assert_eq!(left, Some(Duration::from_millis(12)));
    }

    #[test]
    fn test_no_sleep_after_overrun() {
        let start = Instant::now();
        let clock = FrameClock::new(60, start);
        assert_eq!(clock.remaining(start, start + Duration::from_millis(16)), None);
        assert_eq!(clock.remaining(start, start + Duration::from_millis(40)), None);
    }

    #[test]
    fn test_fps_reported_once_per_second() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);

        for i in 1..60u64 {
            let now = start + Duration::from_millis(i * 16);
            assert_eq!(clock.record_frame(now), None);
        }

        let report = clock.record_frame(start + Duration::from_millis(1001));
        assert_eq!(report, Some(60));
        assert_eq!(clock.fps(), 60);
        assert_eq!(clock.ticks(), 60);

        // Counter starts over
        assert_eq!(clock.record_frame(start + Duration::from_millis(1010)), None);
        assert_eq!(clock.record_frame(start + Duration::from_millis(2001)), Some(2));
    }
}
