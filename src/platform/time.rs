//! Spawn cadence and frame pacing
//!
//! Both types take the current time or elapsed time as arguments instead of
//! reading the clock themselves, so tests can drive them with exact values.

use std::time::{Duration, Instant};

/// Smallest interval either type accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

fn normalize_non_zero_duration(value: Duration) -> Duration {
    if value.is_zero() { MIN_INTERVAL } else { value }
}

/// Recurring timer that fires once per elapsed interval
///
/// Armed once at startup and never stopped. Elapsed time carries over between
/// polls, so the cadence does not drift with frame timing.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    accumulated: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: normalize_non_zero_duration(interval),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return how many times the timer fired
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Caps the loop at a fixed frame rate
///
/// The host waits until [`FrameLimiter::deadline`] and then calls
/// [`FrameLimiter::tick`], which reports the time since the previous frame.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let frame = normalize_non_zero_duration(Duration::from_secs_f64(
            1.0 / target_fps.max(1) as f64,
        ));
        Self {
            frame,
            last: now,
            next: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Start a frame at `now`; returns time elapsed since the previous one
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        self.next = now + self.frame;
        elapsed
    }
}
