//! Frame timing: elapsed time since mount and delta since the last frame.

use std::time::{Duration, Instant};

/// One animation frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started
    pub elapsed_s: f32,
    /// Seconds since the previous tick
    pub delta_s: f32,
}

/// Monotonic frame clock
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Tick at an explicit instant (earlier instants count as zero delta)
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);

        FrameTime {
            elapsed_s: self.last.duration_since(self.start).as_secs_f32(),
            delta_s: delta.as_secs_f32(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.last.duration_since(self.start)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
