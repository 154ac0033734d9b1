#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Longest frame gap reported as-is. Anything above (a paused tab, a
/// debugger stop) is clamped so the character does not teleport through a
/// whole walk on resume.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Timer for tracking frame timing and elapsed time.
///
/// The core itself never reads the wall clock; hosts own the loop, tick the
/// timer once per frame, and pass [`Timer::dt_seconds`] into
/// [`Viewer::update`](crate::viewer::Viewer::update).
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick, clamped to [`MAX_FRAME_DELTA`]
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer (called by the host once per frame).
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = (now - self.last_update).min(MAX_FRAME_DELTA);
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// The clamped frame delta in seconds, ready to feed into the update.
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
