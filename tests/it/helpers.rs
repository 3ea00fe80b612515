//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `DragScript` - Builder for synthetic drag gestures against a
//!   `DrawerController`
//! - `settle()` - Run an in-flight animation to completion, asserting
//!   the offset range invariant at every sampled instant
//! - Common fixtures (`open_controller`, the `W` width constant)

use budgetboard::drawer::DrawerController;
use std::time::{Duration, Instant};

/// Drawer width used across tests.
pub const W: f32 = 280.0;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Tick the controller every 10ms until it settles, asserting that the
/// offset never leaves `[-W, 0]`. Returns the instant it settled at.
pub fn settle(ctl: &mut DrawerController, from: Instant) -> Instant {
    let mut now = from;
    for _ in 0..500 {
        let continuing = ctl.tick(now);
        assert!(
            ctl.offset() >= -W && ctl.offset() <= 0.0,
            "offset {} escaped [-W, 0]",
            ctl.offset()
        );
        if !continuing && ctl.state().is_settled() {
            return now;
        }
        now += ms(10);
    }
    panic!("controller did not settle");
}

/// A controller that has been opened and allowed to settle.
pub fn open_controller() -> (DrawerController, Instant) {
    let mut ctl = DrawerController::new(W);
    let t0 = Instant::now();
    ctl.open(t0);
    let settled_at = settle(&mut ctl, t0);
    assert!(ctl.is_open());
    (ctl, settled_at)
}

/// Builder for a synthetic drag: a claimed gesture, a sequence of
/// cumulative-dx samples, and a release velocity.
///
/// # Example
/// ```ignore
/// let mut ctl = DrawerController::new(W);
/// let end = DragScript::new()
///     .move_to(W / 2.0)
///     .release_velocity(0.0)
///     .run(&mut ctl, Instant::now());
/// ```
pub struct DragScript {
    samples: Vec<f32>,
    release_velocity: f32,
}

impl Default for DragScript {
    fn default() -> Self {
        Self::new()
    }
}

impl DragScript {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            release_velocity: 0.0,
        }
    }

    /// Append a cumulative-dx sample.
    pub fn move_to(mut self, cumulative_dx: f32) -> Self {
        self.samples.push(cumulative_dx);
        self
    }

    pub fn release_velocity(mut self, velocity_x: f32) -> Self {
        self.release_velocity = velocity_x;
        self
    }

    /// Drive the controller through the drag, release, and settle.
    /// Asserts the offset invariant after every sample.
    pub fn run(self, ctl: &mut DrawerController, start: Instant) -> Instant {
        ctl.begin_drag(start);
        let final_dx = self.samples.last().copied().unwrap_or(0.0);
        for dx in &self.samples {
            ctl.drag_move(*dx);
            assert!(ctl.offset() >= -W && ctl.offset() <= 0.0);
        }
        ctl.release(final_dx, self.release_velocity, start);
        settle(ctl, start)
    }
}
