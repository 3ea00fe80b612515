//! Pointer tracking state machine.
//!
//! Tracks a pressed pointer from mouse down until the gesture is either
//! claimed by the drawer, yielded to the underlying list, or released.
//! A single explicit state replaces scattered "is mouse down"/"did we
//! claim" flags.
//!
//! ## State Transitions
//!
//! ```text
//! Idle    -> Pending        (left mouse down)
//! Pending -> DrawerGesture  (move satisfies the claim predicate)
//! Pending -> Yielded        (movement happened but was not claimed)
//! Any     -> Idle           (mouse up)
//! ```

use crate::constants::VELOCITY_SMOOTHING;
use gpui::{Pixels, Point};
use std::time::Instant;

/// Displacement and velocity tracking for one pressed pointer.
#[derive(Debug, Clone)]
pub struct PointerTracking {
    /// Position at mouse down, window coordinates
    pub start: Point<Pixels>,
    /// Most recent position
    pub last: Point<Pixels>,
    /// Time of the most recent sample
    pub last_time: Instant,
    /// Exponentially smoothed horizontal velocity in px/ms
    pub velocity_x: f32,
}

impl PointerTracking {
    pub fn new(start: Point<Pixels>, now: Instant) -> Self {
        Self {
            start,
            last: start,
            last_time: now,
            velocity_x: 0.0,
        }
    }

    /// Fold one move sample into the velocity estimate. O(1), no
    /// allocation; called for every pointer-move event.
    pub fn advance(&mut self, pos: Point<Pixels>, now: Instant) {
        let dt_ms = now.saturating_duration_since(self.last_time).as_secs_f32() * 1000.0;
        if dt_ms > 0.0 {
            let step = f32::from(pos.x) - f32::from(self.last.x);
            let sample = step / dt_ms;
            self.velocity_x += VELOCITY_SMOOTHING * (sample - self.velocity_x);
        }
        self.last = pos;
        self.last_time = now;
    }

    /// Cumulative displacement since mouse down.
    pub fn cumulative(&self, pos: Point<Pixels>) -> (f32, f32) {
        (
            f32::from(pos.x) - f32::from(self.start.x),
            f32::from(pos.y) - f32::from(self.start.y),
        )
    }
}

/// Pointer interaction state.
#[derive(Debug, Clone, Default)]
pub enum PointerState {
    /// No pressed pointer
    #[default]
    Idle,

    /// Pointer is down; neither claimed nor rejected yet
    Pending(PointerTracking),

    /// The drawer claimed this gesture; moves feed the controller
    DrawerGesture(PointerTracking),

    /// The claim predicate rejected this gesture; the list owns it
    /// until mouse up
    Yielded,
}

impl PointerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawer_gesture(&self) -> bool {
        matches!(self, Self::DrawerGesture(_))
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
