//! Interruptible animation clock for the drawer offset.
//!
//! The clock interpolates from a start value to a target over a fixed
//! duration with a cubic ease-out curve. Retargeting mid-flight restarts
//! the clock from the *live* interpolated value, so interrupting an
//! animation never produces a visual jump.
//!
//! All methods take `now` explicitly; tests drive the clock with
//! synthetic instants instead of sleeping.

use crate::constants::DRAWER_ANIMATION_MS;
use std::time::{Duration, Instant};

/// Cubic ease-out: fast start, gentle settle. Maps [0, 1] -> [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// A single-value animation from `from` to `target`.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    from: f32,
    target: f32,
    started: Instant,
    duration: Duration,
}

impl AnimationClock {
    pub fn new(from: f32, target: f32, now: Instant) -> Self {
        Self::with_duration(from, target, now, Duration::from_millis(DRAWER_ANIMATION_MS))
    }

    pub fn with_duration(from: f32, target: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            target,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Interpolated value at `now`. Exact at both endpoints: returns
    /// `from` before the start instant and `target` once the duration
    /// has elapsed.
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.target - self.from) * ease_out_cubic(t)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Redirect the animation toward `new_target`, restarting from the
    /// live interpolated value so the transition stays continuous.
    pub fn retarget(&mut self, now: Instant, new_target: f32) {
        self.from = self.value_at(now);
        self.target = new_target;
        self.started = now;
    }
}
